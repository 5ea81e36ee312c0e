use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::UniqmapConfig;
use crate::core::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".uniqmap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string and reject values the demo cannot use
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<UniqmapConfig, String> {
    let config = toml::from_str::<UniqmapConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Some(title) = config.demo.as_ref().and_then(|demo| demo.title.as_deref()) {
        if title.trim().is_empty() {
            return Err("demo.title must not be empty".to_string());
        }
    }

    Ok(config)
}

fn load_config_file(config_path: &Path) -> Result<UniqmapConfig> {
    let contents = read_config_file(config_path)?;
    parse_and_validate_config(&contents).map_err(|message| Error::configuration(config_path, message))
}

fn try_load_config_from_path(config_path: &Path) -> Option<UniqmapConfig> {
    match load_config_file(config_path) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(Error::Io(e)) => {
            // A missing file just means "keep looking"
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            None
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            Some(UniqmapConfig::default())
        }
    }
}

/// Directories from `start` upwards, at most `max_depth` of them
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

/// Find the nearest config file at or above `start`.
///
/// The first file found wins, even when it is invalid; an invalid file
/// yields the default configuration rather than one further up the tree.
pub fn load_config_from(start: &Path) -> UniqmapConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            UniqmapConfig::default()
        })
}

pub fn load_config() -> UniqmapConfig {
    match std::env::current_dir() {
        Ok(current) => load_config_from(&current),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            UniqmapConfig::default()
        }
    }
}
