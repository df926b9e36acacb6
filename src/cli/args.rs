use clap::Parser;
use std::path::PathBuf;

/// SmartDaemons — An allowlist-based launch daemon scanner for macOS
#[derive(Parser, Debug)]
#[command(
    name = "smartdaemons",
    version,
    about = "Scan launchd directories for unexpected daemons",
    long_about = "SmartDaemons lists every file in your configured launchd directories\n\
                   and flags the ones whose name does not start with an allowed prefix.\n\
                   With --clean, each unexpected file can be deleted after confirmation.",
    after_help = "CONFIG:\n  \
        ~/.smartdaemons/daemons.config      Allowed filename prefixes, one per line\n  \
        ~/.smartdaemons/locations.config    Directories to scan, one per line\n\n\
        EXAMPLES:\n  \
        smartdaemons                        Report known and unexpected daemons\n  \
        smartdaemons --clean                Ask per unexpected daemon before deleting\n  \
        smartdaemons --config-dir ./conf    Use an alternate config directory"
)]
pub struct Cli {
    /// Ask for each unexpected daemon whether it should be removed.
    /// Without this flag, only warnings are shown.
    #[arg(long)]
    pub clean: bool,

    /// Directory holding daemons.config and locations.config
    #[arg(long, value_name = "PATH", env = "SMARTDAEMONS_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,
}
