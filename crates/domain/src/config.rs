pub mod check;
pub mod errors;
pub mod logging;
pub mod root;

pub use check::{CheckConfig, ReportFormat};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config, DEFAULT_CONFIG_FILE};
