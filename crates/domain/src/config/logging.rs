use serde::{Deserialize, Serialize};

pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit log lines as JSON objects instead of plain text.
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// `level` is a filter in `RUST_LOG` syntax: comma-separated directives,
    /// each a bare level or `target=level` (`info,ferrous_zonecheck=debug`).
    /// Bare target names without a level are not accepted.
    pub fn is_valid_filter(&self) -> bool {
        let mut directives = self
            .level
            .split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .peekable();

        if directives.peek().is_none() {
            return false;
        }

        directives.all(|directive| {
            let level = match directive.rsplit_once('=') {
                Some((target, level)) if !target.trim().is_empty() => level,
                Some(_) => return false,
                None => directive,
            };
            LOG_LEVELS.contains(&level.trim().to_ascii_lowercase().as_str())
        })
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
