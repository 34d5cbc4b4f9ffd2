//! Append-only JSON-lines log of session events.
//!
//! One object per line: the event's own fields plus a `ts_ms` timestamp
//! relative to process start.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::SessionEvent;

#[derive(Serialize)]
struct Record<'a> {
    ts_ms: u64,
    #[serde(flatten)]
    event: &'a SessionEvent,
}

pub struct EventLog<W: Write> {
    out: W,
    written: u64,
}

impl EventLog<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open event log {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    pub fn record(&mut self, ts_ms: u64, event: &SessionEvent) -> Result<()> {
        let line = serde_json::to_string(&Record { ts_ms, event })?;
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Number of records written so far
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
