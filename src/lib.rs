mod databricks_logger;
pub mod format;
mod global;
mod log_macros;
mod logger;
mod logger_levels;
mod logger_options;
mod logger_transport;
mod registry;
pub mod transports;

pub use databricks_logger::DatabricksLogger;
pub use format::LogInfo;
pub use global::{configure, flush, get_logger};
#[cfg(feature = "log-backend")]
pub use logger::register_with_log;
pub use logger::Logger;
pub use logger_levels::{Level, ParseLevelError, LOG_LEVELS};
pub use logger_options::{ConfigError, LoggerConfig};
pub use logger_transport::LoggerTransport;
pub use registry::Registry;
