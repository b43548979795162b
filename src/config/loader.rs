use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::FileConfig;
use crate::errors::{FilterError, Result};

/// Configuration file looked up from the working directory upwards
pub const CONFIG_FILE_NAME: &str = ".linesift.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a TOML configuration. `path` is only used for error messages.
pub fn parse_config(contents: &str, path: &Path) -> Result<FileConfig> {
    toml::from_str::<FileConfig>(contents).map_err(|e| FilterError::config(path, e.to_string()))
}

/// Generate `start` and its ancestors, at most `max_depth` directories
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Nearest configuration file at or above `start`
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

/// Discover and load the configuration file nearest to `start`.
///
/// A file that exists but cannot be read is logged and ignored. A file that
/// does not parse is an error.
pub fn load_config_from(start: &Path) -> Result<Option<FileConfig>> {
    let Some(path) = find_config_file(start) else {
        log::debug!(
            "No {} found within {} directories of {}",
            CONFIG_FILE_NAME,
            MAX_TRAVERSAL_DEPTH,
            start.display()
        );
        return Ok(None);
    };

    let contents = match read_config_file(&path) {
        Ok(contents) => contents,
        Err(e) => {
            log::warn!("Failed to read config file {}: {}", path.display(), e);
            return Ok(None);
        }
    };

    let config = parse_config(&contents, &path)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

/// Load configuration for a run.
///
/// An explicit path must exist and parse. Without one the working directory
/// and its ancestors are searched.
pub fn load_config(explicit: Option<&Path>) -> Result<Option<FileConfig>> {
    if let Some(path) = explicit {
        let contents =
            read_config_file(path).map_err(|e| FilterError::config(path, e.to_string()))?;
        let config = parse_config(&contents, path)?;
        log::debug!("Loaded config from {}", path.display());
        return Ok(Some(config));
    }

    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            log::warn!("Failed to get current directory: {}. Using default config.", e);
            Ok(None)
        }
    }
}
