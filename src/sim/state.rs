//! Game state machine
//!
//! `GameState` owns the road, the jump engine and the current phase. It is
//! the only thing that regenerates the road or sends the player back to
//! cell 0, and it does both only on entry to `GamePhase::Init`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::evaluate::{Verdict, evaluate};
use super::jump::{JumpEngine, JumpStart, PlayerState};
use super::motion::{FixedDuration, MotionProfile, Step};
use super::road::{BitSource, Road};
use super::timer::{TimerAction, Timers};
use crate::error::GameError;
use crate::settings::Settings;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start prompt showing, fresh road, input off
    Init,
    /// Run in progress
    Playing,
    /// Terminal; only `reset` leaves it
    End,
}

/// What the UI layer shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    /// Displayed step count, clamped to the road length
    pub steps: usize,
    pub show_start_prompt: bool,
}

/// Why an input did not turn into a jump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropReason {
    InputDisabled,
    AlreadyJumping,
}

/// Notifications produced while the game advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh road is ready; `run` counts INIT entries from 1
    EnteredInit { run: u32 },
    Started,
    InputEnabled,
    JumpStarted { step: Step, from: usize, to: usize },
    InputDropped { step: Step, reason: DropReason },
    /// No motion profile for this step; the player did not move
    JumpFailed { step: Step },
    JumpCompleted { index: usize },
    StepsChanged { steps: usize },
    /// The landing ended the run
    Reset { landed: usize },
    Finished,
}

/// Complete game state
pub struct GameState {
    settings: Settings,
    /// Run seed for reproducibility
    seed: u64,
    bits: Box<dyn BitSource>,
    motion: Box<dyn MotionProfile>,
    road: Road,
    jump: JumpEngine,
    phase: GamePhase,
    input_enabled: bool,
    timers: Timers,
    hud: Hud,
    run: u32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a game seeded from `settings.seed` (or a random seed) and
    /// enter `Init`
    pub fn new(settings: Settings) -> Result<Self, GameError> {
        let seed = settings.seed.unwrap_or_else(rand::random);
        let bits = Box::new(Pcg32::seed_from_u64(seed));
        Self::build(settings, seed, bits)
    }

    /// Create a game whose roads come from a caller-supplied bit source
    pub fn with_bit_source(
        settings: Settings,
        bits: Box<dyn BitSource>,
    ) -> Result<Self, GameError> {
        let seed = settings.seed.unwrap_or_default();
        Self::build(settings, seed, bits)
    }

    fn build(
        settings: Settings,
        seed: u64,
        mut bits: Box<dyn BitSource>,
    ) -> Result<Self, GameError> {
        settings.validate()?;
        let road = Road::generate(settings.road_length, bits.as_mut())?;
        log::info!("New game (seed {seed})");

        let mut state = Self {
            motion: Box::new(FixedDuration(settings.jump_duration)),
            jump: JumpEngine::new(settings.cell_width),
            settings,
            seed,
            bits,
            road,
            phase: GamePhase::Init,
            input_enabled: false,
            timers: Timers::new(),
            hud: Hud {
                steps: 0,
                show_start_prompt: true,
            },
            run: 1,
            events: Vec::new(),
        };
        state.events.push(GameEvent::EnteredInit { run: state.run });
        Ok(state)
    }

    /// Replace the fixed-duration fallback with a real motion profile
    pub fn with_motion_profile(mut self, motion: Box<dyn MotionProfile>) -> Self {
        self.motion = motion;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn road(&self) -> &Road {
        &self.road
    }

    pub fn player(&self) -> &PlayerState {
        self.jump.player()
    }

    pub fn hud(&self) -> Hud {
        self.hud
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Number of times `Init` has been entered
    pub fn run(&self) -> u32 {
        self.run
    }

    /// Take every event produced since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Regenerate the road, put the player back on cell 0 and show the
    /// start prompt
    pub fn enter_init(&mut self) -> Result<(), GameError> {
        self.road = Road::generate(self.settings.road_length, self.bits.as_mut())?;
        self.jump.reset();
        self.input_enabled = false;
        self.timers.cancel_all();
        self.hud.show_start_prompt = true;
        self.phase = GamePhase::Init;
        self.run += 1;
        log::info!("Run {} ready: {}", self.run, self.road);
        self.events.push(GameEvent::EnteredInit { run: self.run });
        Ok(())
    }

    /// Start command: `Init` -> `Playing`
    ///
    /// Input is switched on by a one-shot timer, so the first jump can only
    /// happen on a later `advance`. Returns false outside `Init`.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Init {
            log::debug!("Ignoring start in {:?}", self.phase);
            return false;
        }
        self.hud.show_start_prompt = false;
        self.hud.steps = 0;
        self.timers
            .schedule(self.settings.input_enable_delay, TimerAction::EnableInput);
        self.phase = GamePhase::Playing;
        log::info!("Run {} started", self.run);
        self.events.push(GameEvent::Started);
        self.events.push(GameEvent::StepsChanged { steps: 0 });
        true
    }

    /// Enter the terminal `End` phase
    pub fn finish(&mut self) {
        self.input_enabled = false;
        self.timers.cancel_all();
        self.phase = GamePhase::End;
        log::info!("Game finished after {} runs", self.run);
        self.events.push(GameEvent::Finished);
    }

    /// Leave whatever phase we are in and start over at `Init`
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.enter_init()
    }

    /// Dispatch a jump command
    ///
    /// Dropped while input is off or a jump is in flight. A missing motion
    /// profile is logged and reported as `JumpFailed`; the player stays put.
    pub fn request_jump(&mut self, step: Step) {
        if self.phase != GamePhase::Playing || !self.input_enabled {
            self.events.push(GameEvent::InputDropped {
                step,
                reason: DropReason::InputDisabled,
            });
            return;
        }

        let from = self.jump.index();
        match self.jump.start_jump(step, self.motion.as_ref()) {
            Ok(JumpStart::Started { target_index, .. }) => {
                self.events.push(GameEvent::JumpStarted {
                    step,
                    from,
                    to: target_index,
                });
            }
            Ok(JumpStart::Dropped) => {
                self.events.push(GameEvent::InputDropped {
                    step,
                    reason: DropReason::AlreadyJumping,
                });
            }
            Err(e) => {
                log::warn!("Jump aborted: {e}");
                self.events.push(GameEvent::JumpFailed { step });
            }
        }
    }

    /// Advance timers and the jump in flight by `dt` seconds
    pub fn advance(&mut self, dt: f32) -> Result<(), GameError> {
        if self.phase == GamePhase::End {
            return Ok(());
        }

        for action in self.timers.advance(dt) {
            match action {
                TimerAction::EnableInput if self.phase == GamePhase::Playing => {
                    self.input_enabled = true;
                    log::debug!("Input enabled");
                    self.events.push(GameEvent::InputEnabled);
                }
                TimerAction::EnableInput => {}
            }
        }

        if let Some(landed) = self.jump.tick(dt) {
            self.on_jump_completed(landed.index)?;
        }
        Ok(())
    }

    fn on_jump_completed(&mut self, index: usize) -> Result<(), GameError> {
        self.events.push(GameEvent::JumpCompleted { index });
        if self.phase != GamePhase::Playing {
            return Ok(());
        }

        self.hud.steps = index.min(self.settings.road_length);
        self.events.push(GameEvent::StepsChanged {
            steps: self.hud.steps,
        });

        match evaluate(index, &self.road) {
            Verdict::Continue => Ok(()),
            Verdict::Reset => {
                log::info!(
                    "Run {} over at cell {index} ({} steps)",
                    self.run,
                    self.hud.steps
                );
                self.events.push(GameEvent::Reset { landed: index });
                self.enter_init()
            }
        }
    }
}
