mod stream;

pub use stream::{SharedStream, StreamTransport};
pub use winston_transport::transport_adapters::WriterTransport;
pub use winston_transport::Transport;

// Convenience functions
pub fn stdout() -> StreamTransport {
    StreamTransport::new(SharedStream::stdout())
}

pub fn stderr() -> StreamTransport {
    StreamTransport::new(SharedStream::stderr())
}
