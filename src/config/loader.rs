use std::fs;
use std::path::{Path, PathBuf};

use super::core::EngineConfig;
use crate::errors::{Result, ResultExt};

/// File name searched for by [`load_config`]
pub const CONFIG_FILE_NAME: &str = ".unit-economics.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse a TOML document and validate every section
pub fn parse_and_validate_config(contents: &str) -> Result<EngineConfig> {
    let config = toml::from_str::<EngineConfig>(contents)
        .map_err(crate::errors::Error::from)
        .context(format!("Failed to parse {}", CONFIG_FILE_NAME))?;
    config.validate()?;
    Ok(config)
}

/// Load and validate configuration from an explicit path
pub fn load_config_from_path(path: &Path) -> Result<EngineConfig> {
    let contents = fs::read_to_string(path)
        .map_err(crate::errors::Error::from)
        .context(format!("Failed to read {}", path.display()))?;
    parse_and_validate_config(&contents)
}

/// Try one candidate path, logging anything other than a missing file
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<EngineConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
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

/// Search `start` and its ancestors for a config file
pub fn load_config_from(start: PathBuf) -> EngineConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            EngineConfig::default()
        })
}

/// Search the current directory and its ancestors for a config file
pub fn load_config() -> EngineConfig {
    match std::env::current_dir() {
        Ok(current) => load_config_from(current),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            EngineConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_directory_ancestors_stops_at_root() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a"), 10).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a"), PathBuf::from("/")]);
    }

    #[test]
    fn test_parse_empty_document_gives_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_parse_rejects_invalid_section() {
        let err = parse_and_validate_config("[simulation]\nhorizon_months = 0\n").unwrap_err();
        assert!(err.to_string().contains("[simulation]"));
    }

    #[test]
    fn test_parse_rejects_oversized_horizon() {
        let err = parse_and_validate_config("[simulation]\nhorizon_months = 4000000000\n")
            .unwrap_err();
        assert!(err.to_string().contains("[simulation]"));
        assert!(err.to_string().contains("horizon_months"));
    }

    #[test]
    fn test_parse_reports_syntax_errors() {
        let err = parse_and_validate_config("[simulation\n").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse .unit-economics.toml"));
    }
}
