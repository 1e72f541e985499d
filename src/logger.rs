use crate::{
    format::{pipe, LOGGER_NAME_KEY},
    logger_levels::Level,
    logger_transport::LoggerTransport,
    transports::SharedStream,
};
use logform::{Format, LogInfo};
use parking_lot::RwLock;
use std::{fmt, sync::Arc};
use winston_transport::Transport;

/// A named logger holding a threshold and the transports records are sent to.
///
/// Loggers are normally obtained from a [`Registry`](crate::Registry), which
/// hands out one instance per name.
pub struct Logger {
    name: String,
    level: RwLock<Level>,
    format: RwLock<Arc<dyn Format<Input = LogInfo> + Send + Sync>>,
    transports: RwLock<Vec<LoggerTransport>>,
}

impl Logger {
    /// Creates a logger that renders records with [`pipe`] unless a transport
    /// carries its own format.
    pub fn new<T: Into<String>>(name: T, level: Level) -> Self {
        let format: Arc<dyn Format<Input = LogInfo> + Send + Sync> = Arc::new(pipe());
        Logger {
            name: name.into(),
            level: RwLock::new(level),
            format: RwLock::new(format),
            transports: RwLock::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Level {
        *self.level.read()
    }

    pub fn set_level(&self, level: Level) {
        *self.level.write() = level;
    }

    pub fn set_format(&self, format: Arc<dyn Format<Input = LogInfo> + Send + Sync>) {
        *self.format.write() = format;
    }

    pub fn is_enabled_for(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Adds a transport wrapped in an Arc directly to the logger
    pub fn add_transport(&self, transport: Arc<dyn Transport<LogInfo> + Send + Sync>) {
        self.add_logger_transport(LoggerTransport::new(transport));
    }

    /// Add a pre-configured LoggerTransport with custom level/format
    pub fn add_logger_transport(&self, transport: LoggerTransport) {
        self.transports.write().push(transport);
    }

    /// Removes a transport previously attached, compared by pointer.
    /// Returns `false` if it was not attached.
    pub fn remove_transport(&self, transport: Arc<dyn Transport<LogInfo> + Send + Sync>) -> bool {
        let mut transports = self.transports.write();
        match transports
            .iter()
            .position(|t| Arc::ptr_eq(&transport, t.get_transport()))
        {
            Some(index) => {
                transports.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn transports(&self) -> Vec<LoggerTransport> {
        self.transports.read().clone()
    }

    /// Whether a transport writing to `stream` is attached.
    pub fn has_stream_transport(&self, stream: &SharedStream) -> bool {
        self.transports
            .read()
            .iter()
            .any(|t| t.is_bound_to(stream))
    }

    pub fn log(&self, level: Level, message: &str) {
        if !self.is_enabled_for(level) {
            return;
        }

        let info = LogInfo::new(level.as_str(), message)
            .with_meta(LOGGER_NAME_KEY, serde_json::Value::String(self.name.clone()));

        // Transports may log back into this logger; no lock is held while they run.
        let transports = self.transports();
        let default_format = Arc::clone(&*self.format.read());

        for transport in &transports {
            if transport.get_level().map_or(false, |threshold| level < threshold) {
                continue;
            }

            let format = transport.get_format().unwrap_or(&default_format);
            if let Some(formatted) = format.transform(info.clone()) {
                transport.get_transport().log(formatted);
            }
        }
    }

    /// Flushes every transport, returning the first failure.
    pub fn flush(&self) -> Result<(), String> {
        let mut result = Ok(());
        for transport in self.transports() {
            if let Err(e) = transport.get_transport().flush() {
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }
        result
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("transports", &self.transports.read().len())
            .finish()
    }
}

macro_rules! create_log_methods {
    ($($method:ident => $level:expr),* $(,)?) => {
        impl Logger {
            $(
                pub fn $method(&self, message: &str) {
                    self.log($level, message);
                }
            )*
        }
    };
}

create_log_methods!(
    debug => Level::Debug,
    info => Level::Info,
    warning => Level::Warning,
    error => Level::Error,
    critical => Level::Critical,
);

#[cfg(feature = "log-backend")]
use log::{Log, Metadata, Record};

#[cfg(feature = "log-backend")]
fn from_log_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warning,
        log::Level::Info => Level::Info,
        log::Level::Debug | log::Level::Trace => Level::Debug,
    }
}

#[cfg(feature = "log-backend")]
struct LogBridge(Arc<Logger>);

#[cfg(feature = "log-backend")]
impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.0.is_enabled_for(from_log_level(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.0
            .log(from_log_level(record.level()), &record.args().to_string());
    }

    fn flush(&self) {
        if let Err(e) = self.0.flush() {
            eprintln!("{}", e);
        }
    }
}

/// Installs `logger` as the backend of the `log` crate macros.
///
/// The `log` max level is left fully open and every record is checked against
/// the logger's current threshold, so later [`Logger::set_level`] calls apply.
/// Fails if another backend was installed first.
#[cfg(feature = "log-backend")]
pub fn register_with_log(logger: Arc<Logger>) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(LogBridge(logger)))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
