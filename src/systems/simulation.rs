//! Loop driver
//!
//! Runs one frame of the game loop per redraw and decides what happens when
//! the surface misbehaves:
//! - Surface lost: reconfigure and carry on (the frame is skipped)
//! - Out of memory: stop
//! - Anything else: log and carry on

use pong_core::{Canvas, FrameOutcome, GameLoop, InputPort, Position};

use super::render::RenderError;
use crate::config::AppConfig;

/// What the event loop should do after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Schedule another frame
    Continue,
    /// Surface needs reconfiguring before the next frame
    RecoverSurface,
    /// Leave the event loop
    Exit,
}

/// Owns the game loop for the lifetime of the app
pub struct SimulationSystem {
    game_loop: GameLoop,
}

impl SimulationSystem {
    /// Build the loop from configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            game_loop: GameLoop::new(
                config.loop_state(),
                config.frame_clock(),
                config.circle_style(),
            ),
        }
    }

    /// Whether another frame should run
    pub fn is_running(&self) -> bool {
        self.game_loop.is_running()
    }

    /// Current circle center
    pub fn position(&self) -> Position {
        self.game_loop.position()
    }

    /// Run one frame: poll, update, draw, present, pace
    pub fn step<I, C>(&mut self, input: &mut I, canvas: &mut C) -> StepResult
    where
        I: InputPort + ?Sized,
        C: Canvas<Error = RenderError> + ?Sized,
    {
        match self.game_loop.frame(input, canvas) {
            Ok(FrameOutcome::Continue) => StepResult::Continue,
            Ok(FrameOutcome::Exit) => {
                let pos = self.game_loop.position();
                log::info!(
                    "Exit requested after {} frames, circle at ({}, {})",
                    self.game_loop.frame_count(),
                    pos.x,
                    pos.y
                );
                StepResult::Exit
            }
            Err(RenderError::SurfaceLost) => {
                log::warn!("Surface lost, reconfiguring");
                self.exit_or(StepResult::RecoverSurface)
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                StepResult::Exit
            }
            Err(e) => {
                log::warn!("Surface error: {}", e);
                self.exit_or(StepResult::Continue)
            }
        }
    }

    /// Input applied before a failed present may already have cleared the running flag
    fn exit_or(&self, result: StepResult) -> StepResult {
        if self.game_loop.is_running() {
            result
        } else {
            StepResult::Exit
        }
    }
}
