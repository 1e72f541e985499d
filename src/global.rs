use crate::{DatabricksLogger, Logger, Registry};
use std::sync::Arc;

/// Returns the logger for `name` from the process-wide registry.
pub fn get_logger(name: &str) -> Arc<Logger> {
    Registry::global().get_logger(name)
}

/// Sets up `name` in the process-wide registry. Same as [`DatabricksLogger::new`].
pub fn configure(name: &str, level: &str) -> DatabricksLogger {
    DatabricksLogger::new(name, level)
}

/// Flushes the transports of the given loggers in the process-wide registry.
pub fn flush(names: &[&str]) -> Result<(), String> {
    names
        .iter()
        .filter(|name| Registry::global().contains(name))
        .try_for_each(|name| get_logger(name).flush())
}
