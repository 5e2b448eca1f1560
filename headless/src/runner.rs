use std::io::Write;

use anyhow::Result;
use game_core::{Config, Driver, GameState, InputSource, Score};
use proto::FrameRecorder;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::pointer::{PointerPattern, ScriptedPointer};

/// Ticks for one full pointer sweep
const SWEEP_PERIOD: u64 = 150;

#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub ticks: u64,
    /// Pace ticks at the configured rate instead of running flat out
    pub realtime: bool,
    pub pointer: PointerPattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub ticks: u64,
    pub frames: u64,
    pub score: Score,
}

/// Simulate a game, writing every input and frame to `out`.
pub async fn run<W: Write>(config: Config, options: RunOptions, out: W) -> Result<(RunReport, W)> {
    let header = serde_json::to_string(&config)?;
    let pointer = ScriptedPointer::new(options.pointer, config.board_height, SWEEP_PERIOD);
    let mut ticker = if options.realtime {
        let mut ticker = interval(config.tick_interval());
        // Late ticks are dropped, not caught up
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Some(ticker)
    } else {
        None
    };

    let mut driver = Driver::new(GameState::new(config), FrameRecorder::new(out), pointer);
    driver.target.write_header(header)?;

    info!(ticks = options.ticks, realtime = options.realtime, pointer = ?options.pointer, "starting run");

    for _ in 0..options.ticks {
        if let Some(ticker) = ticker.as_mut() {
            ticker.tick().await;
        }

        let targets = driver.input.drain();
        for &y in &targets {
            driver.target.record_input(driver.state.tick(), y)?;
        }
        driver.step(&targets)?;

        if let Some(scorer) = driver.state.events.scored() {
            let score = driver.state.score();
            debug!(tick = driver.state.tick(), ?scorer, user = score.user, cpu = score.cpu, "point");
        }
    }

    let report = RunReport {
        ticks: driver.state.tick(),
        frames: driver.target.frames(),
        score: driver.state.score(),
    };
    info!(
        ticks = report.ticks,
        user = report.score.user,
        cpu = report.score.cpu,
        "run finished"
    );

    let (_state, recorder, _pointer) = driver.into_parts();
    let mut out = recorder.into_inner();
    out.flush()?;
    Ok((report, out))
}
