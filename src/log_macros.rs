/// Logs a formatted message through a logger's per-level method.
///
/// ```no_run
/// use databricks_logger::{log, DatabricksLogger};
///
/// let logger = DatabricksLogger::new("ingest", "info");
/// log!(logger, warning, "disk {}% full", 93);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:ident, $($arg:tt)+) => {{
        $logger.$level(&format!($($arg)+));
    }};
}
