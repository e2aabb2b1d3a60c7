use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamEventType {
    Start,
    VolumeShare,
    Delimiter,
    DayRange,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamEvent {
    pub event: StreamEventType,
    pub seq: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Writes one JSON event per line with a 1-based sequence number.
pub struct NdjsonStreamWriter<W: Write> {
    writer: W,
    next_seq: u64,
}

impl<W: Write> NdjsonStreamWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            next_seq: 1,
        }
    }

    pub fn emit_start(&mut self, data: Option<Value>) -> Result<(), CliError> {
        self.emit(StreamEventType::Start, data)
    }

    pub fn emit_volume_share(&mut self, data: Value) -> Result<(), CliError> {
        self.emit(StreamEventType::VolumeShare, Some(data))
    }

    pub fn emit_delimiter(&mut self) -> Result<(), CliError> {
        self.emit(StreamEventType::Delimiter, None)
    }

    pub fn emit_day_range(&mut self, data: Value) -> Result<(), CliError> {
        self.emit(StreamEventType::DayRange, Some(data))
    }

    pub fn emit_end(&mut self, data: Option<Value>) -> Result<(), CliError> {
        self.emit(StreamEventType::End, data)
    }

    fn emit(&mut self, event: StreamEventType, data: Option<Value>) -> Result<(), CliError> {
        let event = StreamEvent {
            event,
            seq: self.next_seq,
            data,
        };
        self.next_seq += 1;

        let payload = serde_json::to_string(&event)?;
        self.writer.write_all(payload.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
