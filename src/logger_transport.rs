use crate::{
    logger_levels::Level,
    transports::{SharedStream, StreamTransport},
};
use logform::{Format, LogInfo};
use std::{fmt, sync::Arc};
use winston_transport::Transport;

/// A transport attached to a [`Logger`](crate::Logger), with its own optional
/// threshold and format.
///
/// Transports built from a [`StreamTransport`] also remember their stream, so
/// a logger can tell whether it already writes to it.
#[derive(Clone)]
pub struct LoggerTransport {
    transport: Arc<dyn Transport<LogInfo> + Send + Sync>,
    level: Option<Level>,
    format: Option<Arc<dyn Format<Input = LogInfo> + Send + Sync>>,
    stream: Option<SharedStream>,
}

impl LoggerTransport {
    pub fn new(transport: Arc<dyn Transport<LogInfo> + Send + Sync>) -> Self {
        Self {
            transport,
            level: None,
            format: None,
            stream: None,
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_format(mut self, format: Arc<dyn Format<Input = LogInfo> + Send + Sync>) -> Self {
        self.format = Some(format);
        self
    }

    pub fn get_level(&self) -> Option<Level> {
        self.level
    }

    pub fn get_format(&self) -> Option<&Arc<dyn Format<Input = LogInfo> + Send + Sync>> {
        self.format.as_ref()
    }

    pub fn get_transport(&self) -> &Arc<dyn Transport<LogInfo> + Send + Sync> {
        &self.transport
    }

    pub fn is_bound_to(&self, stream: &SharedStream) -> bool {
        self.stream
            .as_ref()
            .map_or(false, |own| own.same_stream(stream))
    }
}

impl fmt::Debug for LoggerTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerTransport")
            .field("transport", &"Transport<LogInfo>")
            .field("level", &self.level)
            .field("format", &self.format.as_ref().map(|_| "Format<...>"))
            .field("stream", &self.stream)
            .finish()
    }
}

impl From<Arc<dyn Transport<LogInfo> + Send + Sync>> for LoggerTransport {
    fn from(transport: Arc<dyn Transport<LogInfo> + Send + Sync>) -> Self {
        LoggerTransport::new(transport)
    }
}

impl From<StreamTransport> for LoggerTransport {
    fn from(transport: StreamTransport) -> Self {
        let stream = transport.stream().clone();
        LoggerTransport {
            stream: Some(stream),
            ..LoggerTransport::new(Arc::new(transport))
        }
    }
}
