use crate::{logger::Logger, logger_levels::Level, transports::SharedStream};
use lazy_static::lazy_static;
use parking_lot::RwLock;
use std::{collections::HashMap, fmt, sync::Arc};

lazy_static! {
    static ref GLOBAL_REGISTRY: Registry = Registry::new();
}

/// Name-keyed store of loggers. Asking twice for the same name returns the
/// same [`Logger`].
///
/// A registry also owns the handle it treats as standard output, so tests can
/// substitute an in-memory stream.
pub struct Registry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
    stdout: SharedStream,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_stdout(SharedStream::stdout())
    }

    pub fn with_stdout(stdout: SharedStream) -> Self {
        Registry {
            loggers: RwLock::new(HashMap::new()),
            stdout,
        }
    }

    /// The process-wide registry, bound to the real standard output.
    pub fn global() -> &'static Registry {
        &GLOBAL_REGISTRY
    }

    /// Returns the logger registered under `name`, creating it at
    /// [`Level::Debug`] if there is none yet.
    pub fn get_logger(&self, name: &str) -> Arc<Logger> {
        if let Some(logger) = self.loggers.read().get(name) {
            return Arc::clone(logger);
        }

        let mut loggers = self.loggers.write();
        Arc::clone(
            loggers
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(Logger::new(name, Level::Debug))),
        )
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }

    pub fn stdout(&self) -> &SharedStream {
        &self.stdout
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        f.debug_struct("Registry")
            .field("loggers", &names)
            .field("stdout", &self.stdout)
            .finish()
    }
}
