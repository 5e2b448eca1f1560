use std::io::Read;

use anyhow::{bail, Context, Result};
use game_core::{CommandBuffer, Config, Driver, GameState, NoInput, Score};
use proto::{Record, RecordReader, FORMAT_VERSION};
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub frames: u64,
    pub inputs: u64,
    pub last_tick: u64,
    pub score: Score,
}

fn read_config<R: Read>(records: &mut RecordReader<R>) -> Result<Config> {
    match records.next().transpose()? {
        Some(Record::Header {
            version,
            config_json,
        }) => {
            if version != FORMAT_VERSION {
                bail!("unsupported recording version {version}, expected {FORMAT_VERSION}");
            }
            Config::from_json(&config_json).context("recording carries an invalid config")
        }
        Some(other) => bail!("recording must start with a header, found {other:?}"),
        None => bail!("empty recording"),
    }
}

/// Count what a recording holds without simulating it
pub fn inspect<R: Read>(reader: R) -> Result<Summary> {
    let mut records = RecordReader::new(reader);
    read_config(&mut records)?;

    let mut summary = Summary::default();
    for record in records {
        match record? {
            Record::Input { .. } => summary.inputs += 1,
            Record::Frame(frame) => {
                summary.frames += 1;
                summary.last_tick = frame.tick;
                summary.score = frame.score;
            }
            Record::Header { .. } => warn!("ignoring repeated header"),
        }
    }
    Ok(summary)
}

/// Re-simulate a recording from its config and inputs; every frame must match.
pub fn verify<R: Read>(reader: R) -> Result<Summary> {
    let mut records = RecordReader::new(reader);
    let config = read_config(&mut records)?;
    let mut driver = Driver::new(GameState::new(config), CommandBuffer::new(), NoInput);

    let mut summary = Summary::default();
    let mut pending = Vec::new();
    for record in records {
        match record? {
            Record::Input { tick, y } => {
                if tick != driver.state.tick() {
                    bail!(
                        "input for tick {tick} arrived at tick {}",
                        driver.state.tick()
                    );
                }
                pending.push(y);
                summary.inputs += 1;
            }
            Record::Frame(frame) => {
                driver.step(&pending)?;
                pending.clear();

                if frame.tick != driver.state.tick() {
                    bail!(
                        "frame stamped tick {} but replay is at tick {}",
                        frame.tick,
                        driver.state.tick()
                    );
                }
                if frame.score != driver.state.score() {
                    bail!("score diverged at tick {}", frame.tick);
                }
                if frame.commands != driver.target.last_frame() {
                    bail!("draw commands diverged at tick {}", frame.tick);
                }

                summary.frames += 1;
                summary.last_tick = frame.tick;
                summary.score = frame.score;
            }
            Record::Header { .. } => bail!("unexpected header mid-recording"),
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::PointerPattern;
    use crate::runner::{run, RunOptions};
    use game_core::DrawCommand;
    use proto::write_record;

    async fn record(ticks: u64) -> Vec<u8> {
        let options = RunOptions {
            ticks,
            realtime: false,
            pointer: PointerPattern::Sweep,
        };
        let (_report, bytes) = run(Config::new(), options, Vec::<u8>::new()).await.unwrap();
        bytes
    }

    #[tokio::test]
    async fn test_recording_replays_exactly() {
        let bytes = record(1_500).await;

        let summary = verify(bytes.as_slice()).unwrap();
        assert_eq!(summary.frames, 1_500);
        assert_eq!(summary.inputs, 1_500);
        assert_eq!(summary.last_tick, 1_500);
        assert_eq!(summary, inspect(bytes.as_slice()).unwrap());
    }

    #[tokio::test]
    async fn test_tampered_frame_is_detected() {
        let bytes = record(30).await;
        let mut records: Vec<Record> = RecordReader::new(bytes.as_slice())
            .collect::<Result<_, _>>()
            .unwrap();

        let frame = records
            .iter_mut()
            .rev()
            .find_map(|r| match r {
                Record::Frame(frame) => Some(frame),
                _ => None,
            })
            .unwrap();
        if let Some(DrawCommand::FillCircle { x, .. }) = frame.commands.last_mut() {
            *x += 1.0;
        }

        let mut tampered = Vec::<u8>::new();
        for r in &records {
            write_record(&mut tampered, r).unwrap();
        }

        let err = verify(tampered.as_slice()).unwrap_err();
        assert!(err.to_string().contains("diverged"), "{err}");
    }

    #[test]
    fn test_missing_header_is_rejected() {
        let mut bytes = Vec::<u8>::new();
        write_record(&mut bytes, &Record::Input { tick: 0, y: 1.0 }).unwrap();
        assert!(inspect(bytes.as_slice()).is_err());
        assert!(verify(bytes.as_slice()).is_err());
    }

    #[test]
    fn test_empty_recording_is_rejected() {
        assert!(inspect(&[0u8; 0][..]).is_err());
    }
}
