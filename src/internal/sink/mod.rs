// src/internal/sink/mod.rs

pub mod destination;
pub mod file;
pub mod memory;

pub use destination::Destination;
pub use memory::MemorySink;

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

/// Where a [`Sink`] ultimately writes, for display and inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkKind {
    Stderr,
    Stdout,
    File(PathBuf),
    Memory,
    Custom,
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkKind::Stderr => f.write_str("stderr"),
            SinkKind::Stdout => f.write_str("stdout"),
            SinkKind::File(path) => write!(f, "file:{}", path.display()),
            SinkKind::Memory => f.write_str("memory"),
            SinkKind::Custom => f.write_str("custom"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A shared text destination for log records.
///
/// Cloning a `Sink` yields another handle to the same writer, so the same sink
/// may back several channels. Writes are serialized: one record is written
/// with a single `write_all` while the writer lock is held.
#[derive(Clone)]
pub struct Sink {
    kind: SinkKind,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Sink {
    /// Wrap an arbitrary writer.
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self::with_kind(SinkKind::Custom, writer)
    }

    pub fn stderr() -> Self {
        Self::with_kind(SinkKind::Stderr, io::stderr())
    }

    pub fn stdout() -> Self {
        Self::with_kind(SinkKind::Stdout, io::stdout())
    }

    pub(crate) fn with_kind<W: Write + Send + 'static>(kind: SinkKind, writer: W) -> Self {
        Self {
            kind,
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn kind(&self) -> &SinkKind {
        &self.kind
    }

    /// True when both handles share one underlying writer.
    pub fn same_as(&self, other: &Sink) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }

    /// Write one complete record and flush it.
    pub(crate) fn write_record(&self, record: &str) -> io::Result<()> {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(record.as_bytes())?;
        writer.flush()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("kind", &self.kind).finish()
    }
}

/// `io::Write` view of a [`Sink`], for consumers that write in pieces.
#[derive(Clone)]
pub struct SinkWriter {
    sink: Sink,
}

impl SinkWriter {
    pub fn new(sink: Sink) -> Self {
        Self { sink }
    }
}

impl Write for SinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink
            .writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink
            .writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }
}
