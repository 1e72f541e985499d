use lazy_static::lazy_static;
use logform::LogInfo;
use parking_lot::Mutex;
use std::{
    fmt,
    io::{self, Write},
    sync::Arc,
};
use winston_transport::{transport_adapters::WriterTransport, Transport};

lazy_static! {
    static ref STDOUT: SharedStream = SharedStream::new(io::stdout());
    static ref STDERR: SharedStream = SharedStream::new(io::stderr());
}

/// A writer shared between transports.
///
/// Clones refer to the same underlying writer; [`SharedStream::same_stream`]
/// tells whether two handles do.
#[derive(Clone)]
pub struct SharedStream {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl SharedStream {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        SharedStream {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Handle to the process standard output. Every call returns the same stream.
    pub fn stdout() -> Self {
        STDOUT.clone()
    }

    /// Handle to the process standard error. Every call returns the same stream.
    pub fn stderr() -> Self {
        STDERR.clone()
    }

    pub fn same_stream(&self, other: &SharedStream) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }
}

impl Write for SharedStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.lock().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.writer.lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.lock().flush()
    }
}

impl fmt::Debug for SharedStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedStream")
            .field("writer", &Arc::as_ptr(&self.writer))
            .finish()
    }
}

/// A [`WriterTransport`] that remembers which [`SharedStream`] it writes to.
///
/// The stream is flushed after every record.
pub struct StreamTransport {
    stream: SharedStream,
    writer: WriterTransport<SharedStream, LogInfo>,
}

impl StreamTransport {
    pub fn new(stream: SharedStream) -> Self {
        StreamTransport {
            writer: WriterTransport::new(stream.clone()),
            stream,
        }
    }

    pub fn stream(&self) -> &SharedStream {
        &self.stream
    }

    pub fn is_bound_to(&self, stream: &SharedStream) -> bool {
        self.stream.same_stream(stream)
    }
}

impl Transport<LogInfo> for StreamTransport {
    fn log(&self, info: LogInfo) {
        Transport::log(&self.writer, info);
        if let Err(e) = Transport::flush(&self.writer) {
            eprintln!("Failed to flush log stream: {}", e);
        }
    }

    fn flush(&self) -> Result<(), String> {
        Transport::flush(&self.writer)
    }
}

impl fmt::Debug for StreamTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamTransport")
            .field("stream", &self.stream)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_stdout_handles_are_the_same_stream() {
        assert!(SharedStream::stdout().same_stream(&SharedStream::stdout()));
        assert!(!SharedStream::stdout().same_stream(&SharedStream::stderr()));
    }

    #[test]
    fn test_distinct_streams_differ() {
        let a = SharedStream::new(Buffer::default());
        let b = SharedStream::new(Buffer::default());
        assert!(a.same_stream(&a.clone()));
        assert!(!a.same_stream(&b));
    }

    #[test]
    fn test_transport_is_bound_to_its_stream() {
        let stream = SharedStream::new(Buffer::default());
        let transport = StreamTransport::new(stream.clone());
        assert!(transport.is_bound_to(&stream));
        assert!(!transport.is_bound_to(&SharedStream::stdout()));
    }

    #[test]
    fn test_log_writes_message() {
        let buffer = Buffer::default();
        let transport = StreamTransport::new(SharedStream::new(buffer.clone()));

        transport.log(LogInfo::new("INFO", "svc|ts|INFO|hello"));
        transport.flush().unwrap();

        let output = String::from_utf8(buffer.0.lock().clone()).unwrap();
        assert!(output.contains("svc|ts|INFO|hello"));
    }
}
