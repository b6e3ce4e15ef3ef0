use std::io;
use std::time::Instant;

use crossterm::event::KeyCode;
use ratatui::Terminal;

use crate::config::Config;
use crate::debug;
use crate::flow::MatchScore;
use crate::game::{self, drain_input, RawInput, ResolvedBindings, Round, RoundOutcome};
use crate::menu::GameMode;
use crate::ui;

use super::common::{frame_budget, limit_frame_rate};

/// Run one round to its terminal outcome.
///
/// The loop renders and polls input every frame, but advances the
/// simulation on a fixed timestep: wall-clock time accumulates until a
/// full tick interval has passed, then exactly one tick runs and the
/// accumulator resets. Held-key edges land immediately even when they
/// arrive between ticks.
pub fn run_round<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    mode: GameMode,
    keys: &ResolvedBindings,
    score: &MatchScore,
) -> Result<RoundOutcome, io::Error> {
    debug::log("ROUND_START", &format!("mode={:?}", mode));

    let single_player = matches!(mode, GameMode::SinglePlayer);
    let mut rng = rand::thread_rng();
    let mut round = Round::new(&config.physics, single_player, keys, &mut rng);

    let tick_interval = 1.0 / config.display.target_fps as f32;
    let frame_duration = frame_budget(config.display.target_fps);
    let mut frame_time: f32 = 0.0;
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        frame_time += now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        for input in drain_input()? {
            match input {
                RawInput::Quit => return Ok(RoundOutcome::QuitGame),
                RawInput::KeyDown(KeyCode::Esc) => return Ok(RoundOutcome::QuitToMenu),
                other => round.apply_input(&other),
            }
        }

        // Zero or one simulation ticks per rendered frame
        if frame_time >= tick_interval {
            frame_time = 0.0;
            let outcome = game::tick(&mut round, &config.physics);
            if outcome != RoundOutcome::Continuing {
                debug::log("ROUND_END", &format!("{:?}", outcome));
                return Ok(outcome);
            }
        }

        terminal.draw(|f| ui::render_round(f, &round, score, &config.physics))?;

        limit_frame_rate(now, frame_duration);
    }
}
