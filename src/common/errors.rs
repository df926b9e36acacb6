use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the two config files.
///
/// These are fatal: without `daemons.config` and `locations.config` the
/// program has no scan scope. `main` uses `anyhow` to print them and exit
/// non-zero; everything past config loading reports inline and continues.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: '{}' (create it or pass --config-dir)", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config file '{}': {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not determine home directory for the default config location")]
    NoHomeDir,
}
