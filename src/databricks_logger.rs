use crate::{
    format::pipe,
    logger::Logger,
    logger_levels::Level,
    logger_options::LoggerConfig,
    logger_transport::LoggerTransport,
    registry::Registry,
    transports::StreamTransport,
};
use std::{ops::Deref, sync::Arc};

/// A named logger configured from a level string, writing
/// `name|timestamp|LEVEL|message` lines to standard output.
///
/// Logs only go to stdout. On a Databricks cluster, point the cluster log
/// delivery at a volume if they need to outlive the process.
///
/// The level is matched case-insensitively against `DEBUG`, `INFO`,
/// `WARNING`, `ERROR` and `CRITICAL`; anything else silently becomes `DEBUG`.
/// Construct the logger for a name as often as needed: only one stdout
/// transport is ever attached to it.
///
/// ```no_run
/// use databricks_logger::DatabricksLogger;
///
/// let logger = DatabricksLogger::new("ingest", "warning");
/// logger.info("not shown");
/// logger.warning("disk low");
/// ```
#[derive(Debug, Clone)]
pub struct DatabricksLogger {
    logger: Arc<Logger>,
}

impl DatabricksLogger {
    /// Sets up the logger for `name` in the process-wide registry.
    pub fn new(name: &str, level: &str) -> Self {
        Self::with_registry(Registry::global(), name, level)
    }

    /// Same as [`DatabricksLogger::new`] with the `DEBUG` level.
    pub fn named(name: &str) -> Self {
        Self::new(name, "DEBUG")
    }

    /// Sets up the logger for `name` in `registry`.
    ///
    /// The registry's logger for `name` gets the resolved level, and a
    /// transport writing to [`Registry::stdout`] unless one is attached
    /// already. Every instance for the same name shares that logger, so the
    /// most recent construction decides the level.
    ///
    /// ```
    /// use databricks_logger::{DatabricksLogger, Level, Registry};
    ///
    /// let registry = Registry::new();
    /// let logger = DatabricksLogger::with_registry(&registry, "ingest", "Error");
    /// assert_eq!(logger.level(), Level::Error);
    /// ```
    pub fn with_registry(registry: &Registry, name: &str, level: &str) -> Self {
        let level = Level::resolve(level);
        let logger = registry.get_logger(name);

        let this = DatabricksLogger { logger };
        this.setup_logging(registry, level);
        this
    }

    /// Same as [`DatabricksLogger::with_registry`], taking the name and
    /// level from `config`.
    pub fn from_config(registry: &Registry, config: &LoggerConfig) -> Self {
        Self::with_registry(registry, &config.name, &config.level)
    }

    fn setup_logging(&self, registry: &Registry, level: Level) {
        let stdout = registry.stdout();
        if !self.logger.has_stream_transport(stdout) {
            let transport = LoggerTransport::from(StreamTransport::new(stdout.clone()))
                .with_format(Arc::new(pipe()));
            self.logger.add_logger_transport(transport);
        }

        self.logger.set_level(level);
    }

    /// The underlying logger shared with every other instance of this name.
    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }
}

impl Deref for DatabricksLogger {
    type Target = Logger;

    fn deref(&self) -> &Logger {
        &self.logger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_resolution() {
        let registry = Registry::new();
        let cases = [
            ("debug", Level::Debug),
            ("Info", Level::Info),
            ("WARNING", Level::Warning),
            ("error", Level::Error),
            ("cRiTiCaL", Level::Critical),
            ("verbose", Level::Debug),
            ("", Level::Debug),
            ("9", Level::Debug),
        ];

        for (i, (name, expected)) in cases.into_iter().enumerate() {
            let logger = DatabricksLogger::with_registry(&registry, &format!("l{}", i), name);
            assert_eq!(logger.level(), expected, "level string: {:?}", name);
        }
    }

    #[test]
    fn test_single_stdout_transport_per_name() {
        let registry = Registry::new();
        let first = DatabricksLogger::with_registry(&registry, "ingest", "info");
        let second = DatabricksLogger::with_registry(&registry, "ingest", "error");

        assert!(Arc::ptr_eq(first.logger(), second.logger()));
        assert_eq!(first.transports().len(), 1);
        assert_eq!(second.level(), Level::Error);
        assert_eq!(first.level(), Level::Error);
    }

    #[test]
    fn test_transport_bound_to_other_stream_does_not_count() {
        let registry = Registry::new();
        registry
            .get_logger("svc")
            .add_logger_transport(crate::transports::stderr().into());

        let logger = DatabricksLogger::with_registry(&registry, "svc", "info");

        let transports = logger.transports();
        assert_eq!(transports.len(), 2);
        assert!(transports[0].is_bound_to(&crate::transports::SharedStream::stderr()));
        assert!(transports[1].is_bound_to(registry.stdout()));
    }

    #[test]
    fn test_from_config() {
        let registry = Registry::new();
        let config = LoggerConfig::new("svc").level("critical");
        let logger = DatabricksLogger::from_config(&registry, &config);
        assert_eq!(logger.name(), "svc");
        assert_eq!(logger.level(), Level::Critical);
    }
}
