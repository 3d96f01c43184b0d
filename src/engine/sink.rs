use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::engine::event::CommunicationEvent;

/// Append-only destination for communication events. A whole step's batch
/// arrives in one call and must be flushed together; lines are never
/// rewritten.
pub trait EventSink {
    fn append(&mut self, batch: &[CommunicationEvent]) -> io::Result<()>;
}

/// Line-oriented log file, one event per line, flushed per batch.
pub struct FileEventSink {
    writer: BufWriter<File>,
}

impl FileEventSink {
    /// Opens `path` for appending, creating the file if missing.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(FileEventSink {
            writer: BufWriter::new(file),
        })
    }
}

impl EventSink for FileEventSink {
    fn append(&mut self, batch: &[CommunicationEvent]) -> io::Result<()> {
        for event in batch {
            writeln!(self.writer, "{}", event)?;
        }
        self.writer.flush()
    }
}

/// Vec-backed sink for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryEventSink {
    pub events: Vec<CommunicationEvent>,
}

impl MemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for MemoryEventSink {
    fn append(&mut self, batch: &[CommunicationEvent]) -> io::Result<()> {
        self.events.extend_from_slice(batch);
        Ok(())
    }
}
