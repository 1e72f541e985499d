#![allow(dead_code)]

use databricks_logger::{transports::SharedStream, Registry};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for standard output.
#[derive(Clone, Default)]
pub struct CapturedOutput {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CapturedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        let bytes = self.bytes.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A registry whose standard output is captured.
pub fn captured_registry() -> (Registry, CapturedOutput) {
    let output = CapturedOutput::new();
    let registry = Registry::with_stdout(SharedStream::new(output.clone()));
    (registry, output)
}

/// Splits `name|timestamp|LEVEL|message` into its four fields.
pub fn split_line(line: &str) -> (String, String, String, String) {
    let mut fields = line.splitn(4, '|');
    let mut next = || fields.next().unwrap_or_default().to_string();
    (next(), next(), next(), next())
}
