//! # SmartDaemons
//!
//! An allowlist-based launch daemon scanner and cleaner for macOS.
//!
//! SmartDaemons lists the launchd directories you configure and flags every
//! file whose name does not start with one of your allowed prefixes:
//!
//! - **Allowlist-Driven**: you declare the daemons you expect, everything
//!   else is reported as unexpected
//! - **Interactive Cleanup**: with `--clean`, confirm each unexpected file
//!   before it is removed
//! - **Safe by Default**: without `--clean`, nothing is ever deleted
//! - **100% Offline**: plain-text config, no accounts, no telemetry

pub mod cleaner;
pub mod cli;
pub mod common;
pub mod scanner;
