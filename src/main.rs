use anyhow::Result;
use clap::Parser;

use smartdaemons::cleaner::{DeletePolicy, Interactive};
use smartdaemons::cli::args::Cli;
use smartdaemons::cli::output;
use smartdaemons::common::config::Config;
use smartdaemons::scanner;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("smartdaemons=debug")
            .init();
    }

    output::print_banner();

    let config = Config::load(cli.config_dir.as_deref())?;

    let mut interactive = Interactive;
    let policy: Option<&mut dyn DeletePolicy> = if cli.clean {
        Some(&mut interactive)
    } else {
        None
    };

    let summary = scanner::run_scan(&config, policy);
    output::print_summary(&summary, cli.clean);

    Ok(())
}
