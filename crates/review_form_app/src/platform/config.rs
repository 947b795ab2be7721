//! Loading of the controller's tunables from a RON file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use form_logging::{form_info, form_warn};
use review_form_core::FormConfig;
use thiserror::Error;

/// Environment variable naming the config file when no path is passed.
pub const CONFIG_ENV: &str = "REVIEW_FORM_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
}

/// Reads the config at `path`. No path, or a path that does not exist, yields
/// the defaults; fields missing from the file keep their defaults too.
pub fn load_config(path: Option<&Path>) -> Result<FormConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(FormConfig::default());
    };

    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            form_warn!("Config {:?} not found, using defaults", path);
            return Ok(FormConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config = ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    form_info!("Loaded config from {:?}", path);
    Ok(config)
}

/// The default config rendered as pretty RON, as a starting point for edits.
pub fn default_config_ron() -> Result<String, ConfigError> {
    let pretty = ron::ser::PrettyConfig::new();
    Ok(ron::ser::to_string_pretty(&FormConfig::default(), pretty)?)
}
