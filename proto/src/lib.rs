//! Recording format for Pong sessions
//!
//! Uses postcard for compact binary serialization. A recording is a sequence
//! of length-prefixed records (u32 little-endian byte count, then the
//! postcard body).

use std::io::{Read, Write};

use game_core::{DrawCommand, DrawTarget, FrameInfo, Score};
use postcard::{from_bytes, to_allocvec};
use thiserror::Error;

/// Current recording format version
pub const FORMAT_VERSION: u16 = 1;

/// Records larger than this are treated as corrupt
pub const MAX_RECORD_LEN: u32 = 1 << 20;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("i/o error")]
    Io(#[from] std::io::Error),
    #[error("malformed record")]
    Decode(#[from] postcard::Error),
    #[error("record truncated: expected {expected} bytes, got {got}")]
    Truncated { expected: usize, got: usize },
    #[error("record length {0} exceeds limit")]
    TooLarge(u32),
}

// ============================================================================
// Records
// ============================================================================

/// One painted frame
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub score: Score,
    pub commands: Vec<DrawCommand>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Record {
    /// First record of every recording
    Header { version: u16, config_json: String },

    /// Pointer target applied before `tick` was simulated
    Input { tick: u64, y: f32 },

    /// Frame painted after `tick` was simulated
    Frame(Frame),
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl Record {
    /// Serialize record body to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize record body from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

/// Append one length-prefixed record
pub fn write_record<W: Write>(out: &mut W, record: &Record) -> Result<(), RecordError> {
    let body = record.to_bytes()?;
    let len = u32::try_from(body.len()).map_err(|_| RecordError::TooLarge(u32::MAX))?;
    if len > MAX_RECORD_LEN {
        return Err(RecordError::TooLarge(len));
    }
    out.write_all(&len.to_le_bytes())?;
    out.write_all(&body)?;
    Ok(())
}

/// Iterates the records of a recording
pub struct RecordReader<R> {
    inner: R,
}

impl<R: Read> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Next record, or `None` at a clean end of stream
    pub fn read_record(&mut self) -> Result<Option<Record>, RecordError> {
        let mut header = [0u8; 4];
        let mut filled = 0;
        while filled < header.len() {
            let n = self.inner.read(&mut header[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        match filled {
            0 => return Ok(None),
            4 => {}
            got => return Err(RecordError::Truncated { expected: 4, got }),
        }

        let len = u32::from_le_bytes(header);
        if len > MAX_RECORD_LEN {
            return Err(RecordError::TooLarge(len));
        }

        let mut body = Vec::with_capacity(len as usize);
        (&mut self.inner).take(len as u64).read_to_end(&mut body)?;
        if body.len() != len as usize {
            return Err(RecordError::Truncated {
                expected: len as usize,
                got: body.len(),
            });
        }

        Ok(Some(Record::from_bytes(&body)?))
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<Record, RecordError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}

// ============================================================================
// Recording draw target
// ============================================================================

/// `DrawTarget` that appends every painted frame to a recording
pub struct FrameRecorder<W> {
    out: W,
    tick: u64,
    score: Score,
    pending: Vec<DrawCommand>,
    frames: u64,
}

impl<W: Write> FrameRecorder<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            tick: 0,
            score: Score::new(),
            pending: Vec::new(),
            frames: 0,
        }
    }

    /// Write the header record
    pub fn write_header(&mut self, config_json: String) -> Result<(), RecordError> {
        write_record(
            &mut self.out,
            &Record::Header {
                version: FORMAT_VERSION,
                config_json,
            },
        )
    }

    pub fn record_input(&mut self, tick: u64, y: f32) -> Result<(), RecordError> {
        write_record(&mut self.out, &Record::Input { tick, y })
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DrawTarget for FrameRecorder<W> {
    type Error = RecordError;

    fn begin_frame(&mut self, info: FrameInfo) -> Result<(), Self::Error> {
        self.tick = info.tick;
        self.score = info.score;
        self.pending.clear();
        Ok(())
    }

    fn draw(&mut self, command: &DrawCommand) -> Result<(), Self::Error> {
        self.pending.push(command.clone());
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), Self::Error> {
        let frame = Frame {
            tick: self.tick,
            score: self.score,
            commands: std::mem::take(&mut self.pending),
        };
        write_record(&mut self.out, &Record::Frame(frame))?;
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GameState, Side};

    #[test]
    fn test_recording_reads_back_in_order() {
        let state = GameState::default();
        let mut recorder = FrameRecorder::new(Vec::<u8>::new());
        recorder.write_header("{}".to_string()).unwrap();
        recorder.record_input(0, 42.0).unwrap();

        recorder
            .begin_frame(FrameInfo {
                tick: 1,
                score: state.score(),
            })
            .unwrap();
        for command in &state.render() {
            recorder.draw(command).unwrap();
        }
        recorder.end_frame().unwrap();
        assert_eq!(recorder.frames(), 1);

        let bytes = recorder.into_inner();
        let records: Vec<Record> = RecordReader::new(bytes.as_slice())
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(
            records[0],
            Record::Header {
                version: FORMAT_VERSION,
                config_json: "{}".to_string()
            }
        );
        assert_eq!(records[1], Record::Input { tick: 0, y: 42.0 });
        match &records[2] {
            Record::Frame(frame) => {
                assert_eq!(frame.tick, 1);
                assert_eq!(frame.commands, state.render());
            }
            other => panic!("expected frame, got {other:?}"),
        }
    }

    #[test]
    fn test_truncated_body_is_reported() {
        let mut bytes = Vec::<u8>::new();
        write_record(&mut bytes, &Record::Input { tick: 3, y: 1.5 }).unwrap();
        bytes.pop();

        let mut reader = RecordReader::new(bytes.as_slice());
        assert!(matches!(
            reader.read_record(),
            Err(RecordError::Truncated { .. })
        ));
    }

    #[test]
    fn test_truncated_header_is_reported() {
        let bytes = [7u8, 0];
        let mut reader = RecordReader::new(&bytes[..]);
        assert!(matches!(
            reader.read_record(),
            Err(RecordError::Truncated {
                expected: 4,
                got: 2
            })
        ));
    }

    #[test]
    fn test_oversized_length_is_rejected() {
        let bytes = u32::MAX.to_le_bytes();
        let mut reader = RecordReader::new(&bytes[..]);
        assert!(matches!(
            reader.read_record(),
            Err(RecordError::TooLarge(_))
        ));
    }

    #[test]
    fn test_empty_stream_has_no_records() {
        let mut reader = RecordReader::new(&[0u8; 0][..]);
        assert!(reader.read_record().unwrap().is_none());
    }

    #[test]
    fn test_frame_score_is_stamped() {
        let mut state = GameState::default();
        state.score.increment(Side::Cpu);
        let mut recorder = FrameRecorder::new(Vec::<u8>::new());
        recorder
            .begin_frame(FrameInfo {
                tick: 9,
                score: state.score(),
            })
            .unwrap();
        recorder.end_frame().unwrap();

        let bytes = recorder.into_inner();
        let record = RecordReader::new(bytes.as_slice())
            .read_record()
            .unwrap()
            .unwrap();
        match record {
            Record::Frame(frame) => {
                assert_eq!(frame.tick, 9);
                assert_eq!(frame.score.cpu, 1);
                assert!(frame.commands.is_empty());
            }
            other => panic!("expected frame, got {other:?}"),
        }
    }
}
