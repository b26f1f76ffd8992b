//! Stepping Road entry point
//!
//! Headless native runner: an autoplay policy drives the simulation through
//! the same per-frame `tick` a graphical host would use.
//!
//! Usage: `stepping-road [runs] [settings.json]`

use anyhow::{Context, Result};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use stepping_road::Settings;
use stepping_road::consts::*;
use stepping_road::platform::{InputEvent, MouseButton};
use stepping_road::sim::{Cell, ClipTable, GameEvent, GamePhase, GameState, TickInput, tick};

/// Headless game instance
struct Game {
    state: GameState,
    accumulator: f32,
    input: TickInput,
    /// Simulated wall-clock jitter source
    frame_rng: Pcg32,
    /// Step count shown when each run ended
    results: Vec<usize>,
}

impl Game {
    fn new(state: GameState) -> Self {
        let frame_rng = Pcg32::seed_from_u64(state.seed());
        Self {
            state,
            accumulator: 0.0,
            input: TickInput::default(),
            frame_rng,
            results: Vec::new(),
        }
    }

    /// Pick the next input the way a careful player would: hop one cell
    /// unless that lands in a gap
    fn autoplay(&mut self) {
        match self.state.phase() {
            GamePhase::Init => self.input.apply(&InputEvent::KeyDown("Enter".into())),
            GamePhase::Playing if self.state.input_enabled() && !self.state.player().is_jumping() => {
                let next = self.state.player().index + 1;
                let button = match self.state.road().get(next) {
                    Some(Cell::Gap) => MouseButton::Right,
                    _ => MouseButton::Left,
                };
                self.input.apply(&InputEvent::MouseUp(button));
            }
            _ => {}
        }
    }

    /// Run simulation ticks for one rendered frame
    fn update(&mut self, dt: f32) -> Result<()> {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = std::mem::take(&mut self.input);
            for event in tick(&mut self.state, &input, SIM_DT)? {
                self.on_event(event);
            }
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        Ok(())
    }

    fn on_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::Reset { landed } => {
                let steps = self.state.hud().steps;
                log::info!("Run ended at cell {landed}, {steps} steps");
                self.results.push(steps);
            }
            GameEvent::JumpFailed { step } => log::warn!("No motion profile for {step} jump"),
            _ => {}
        }
    }

    /// Play until `runs` runs have ended
    fn play(&mut self, runs: usize) -> Result<()> {
        while self.results.len() < runs {
            self.autoplay();
            // 50-70 fps
            let frame_dt = self.frame_rng.random_range((1.0 / 70.0)..(1.0 / 50.0));
            self.update(frame_dt)?;
        }
        self.state.finish();
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Stepping Road (headless) starting...");

    let mut args = std::env::args().skip(1);
    let runs: usize = match args.next() {
        Some(arg) => arg.parse().with_context(|| format!("invalid run count {arg:?}"))?,
        None => 3,
    };
    let settings = match args.next() {
        Some(path) => {
            Settings::load(&path).with_context(|| format!("loading settings from {path}"))?
        }
        None => Settings::default(),
    };

    let state = GameState::new(settings)
        .context("building game")?
        .with_motion_profile(Box::new(ClipTable::standard(0.3, 0.5)));
    log::info!("Seed {}", state.seed());

    let mut game = Game::new(state);
    game.play(runs)?;

    for (i, steps) in game.results.iter().enumerate() {
        println!("run {}: {} steps", i + 1, steps);
    }
    Ok(())
}
