use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub posts: PostsConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct PostsConfig {
    /// Directory holding raw post files (supports `~` and env vars).
    #[serde(default)]
    pub dir: Option<String>,
}

/// Markdown extensions enabled when rendering post bodies.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    #[serde(default = "enabled")]
    pub tables: bool,
    #[serde(default = "enabled")]
    pub strikethrough: bool,
    #[serde(default = "enabled")]
    pub autolink: bool,
    #[serde(default = "enabled")]
    pub tasklist: bool,
    #[serde(default)]
    pub footnotes: bool,
    /// Syntax-highlight fenced code blocks (CSS classes, no inline styles).
    #[serde(default = "enabled")]
    pub highlight: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            autolink: true,
            tasklist: true,
            footnotes: false,
            highlight: true,
        }
    }
}

fn enabled() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    /// File the configuration came from; `None` when built-in defaults are used.
    pub source: Option<PathBuf>,
    pub posts_dir: Option<PathBuf>,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}
