use std::path::{Path, PathBuf};
use tracing::debug;

use crate::common::errors::ConfigError;

pub const DAEMONS_FILE: &str = "daemons.config";
pub const LOCATIONS_FILE: &str = "locations.config";

/// SmartDaemons configuration, loaded once at startup.
///
/// Both lists come from plain newline-delimited files; order is preserved
/// and the struct is never mutated after `load`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Allowed filename prefixes from daemons.config
    pub allowed_daemons: Vec<String>,

    /// Directories to scan from locations.config
    pub locations: Vec<PathBuf>,
}

impl Config {
    /// Default config directory (~/.smartdaemons)
    pub fn default_dir() -> Result<PathBuf, ConfigError> {
        dirs::home_dir()
            .map(|home| home.join(".smartdaemons"))
            .ok_or(ConfigError::NoHomeDir)
    }

    /// Load both config files from `dir`, or from the default directory
    /// when `dir` is `None`. Missing or unreadable files are fatal.
    pub fn load(dir: Option<&Path>) -> Result<Self, ConfigError> {
        let dir = match dir {
            Some(d) => d.to_path_buf(),
            None => Self::default_dir()?,
        };

        let allowed_daemons = read_list(&dir.join(DAEMONS_FILE))?;
        let locations = read_list(&dir.join(LOCATIONS_FILE))?
            .into_iter()
            .map(PathBuf::from)
            .collect::<Vec<_>>();

        debug!(
            prefixes = allowed_daemons.len(),
            locations = locations.len(),
            dir = %dir.display(),
            "loaded configuration"
        );

        Ok(Self {
            allowed_daemons,
            locations,
        })
    }
}

/// Read a newline-delimited list file, dropping empty lines.
fn read_list(path: &Path) -> Result<Vec<String>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_list(&contents))
}

/// Split file contents on newlines and drop empty lines, so a trailing
/// newline does not produce a phantom entry.
pub fn parse_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
