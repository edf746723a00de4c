use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use super::{Sink, SinkKind};

/// In-memory sink for tests and for capturing output in-process.
///
/// Every `write` call is kept as its own chunk, so callers can check how
/// many writes a single log record produced.
#[derive(Clone, Default)]
pub struct MemorySink {
    writes: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A [`Sink`] that appends to this buffer.
    pub fn sink(&self) -> Sink {
        Sink::with_kind(SinkKind::Memory, self.clone())
    }

    /// Each captured write, lossily decoded.
    pub fn writes(&self) -> Vec<String> {
        self.lock()
            .iter()
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .collect()
    }

    pub fn write_count(&self) -> usize {
        self.lock().len()
    }

    /// Everything written so far, concatenated.
    pub fn contents(&self) -> String {
        let bytes: Vec<u8> = self.lock().concat();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().iter().all(Vec::is_empty)
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Vec<u8>>> {
        self.writes.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_record_is_one_write() {
        let memory = MemorySink::new();
        let sink = memory.sink();
        sink.write_record("first\n").unwrap();
        sink.write_record("second\n").unwrap();

        assert_eq!(memory.write_count(), 2);
        assert_eq!(memory.writes(), vec!["first\n", "second\n"]);
        assert_eq!(memory.lines(), vec!["first", "second"]);
    }

    #[test]
    fn clear_discards_captured_output() {
        let memory = MemorySink::new();
        memory.sink().write_record("gone\n").unwrap();
        assert!(!memory.is_empty());
        memory.clear();
        assert!(memory.is_empty());
        assert_eq!(memory.contents(), "");
    }
}
