use crate::config::types::{ConfigFile, ResolvedConfig};
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("could not expand '{0}' (home directory or variable not available)")]
    NoHome(String),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from `config_path`, or from the default location.
    ///
    /// An explicit path must exist. Without one, a missing default file
    /// yields the built-in defaults.
    pub fn load(config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.display().to_string()));
                }
                p.to_path_buf()
            }
            None => {
                let p = default_config_path();
                if !p.exists() {
                    debug!(path = %p.display(), "no config file, using defaults");
                    return Ok(ResolvedConfig::default());
                }
                p
            }
        };

        let s = fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }

        let resolved = Self::resolve(path, cf)?;
        debug!(
            source = ?resolved.source,
            posts_dir = ?resolved.posts_dir,
            "loaded configuration"
        );
        Ok(resolved)
    }

    fn resolve(source: PathBuf, cf: ConfigFile) -> Result<ResolvedConfig, ConfigError> {
        let posts_dir = cf.posts.dir.as_deref().map(expand_path).transpose()?;

        let mut logging = cf.logging;
        if let Some(file) = logging.file.take() {
            logging.file = Some(expand_path(&file.to_string_lossy())?);
        }

        Ok(ResolvedConfig { source: Some(source), posts_dir, render: cf.render, logging })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("postmatter").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("postmatter").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome(input.to_string()))?;
    Ok(PathBuf::from(expanded.to_string()))
}
