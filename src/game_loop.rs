//! Fixed-rate frame driver, independent of what is being driven.

use color_eyre::Result;
use std::time::{Duration, Instant};

use crate::input::InputAction;

/// The three per-tick phases, called in order: events, logic, draw
pub trait Phases {
    /// Collects this tick's actions. Must not touch game state.
    fn handle_events(&mut self) -> Result<Vec<InputAction>>;

    fn handle_game_logic(&mut self, actions: &[InputAction]);

    /// Renders the current state. Must not change it.
    fn draw_stuff(&mut self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

pub struct FrameDriver {
    frame_duration: Duration,
    state: LoopState,
    ticks: u64,
}

impl FrameDriver {
    pub fn new(frame_duration: Duration) -> Self {
        Self {
            frame_duration,
            state: LoopState::Running,
            ticks: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Completed ticks so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Runs until a Quit action arrives, sleeping out the rest of each frame
    pub fn run<P: Phases>(&mut self, phases: &mut P) -> Result<()> {
        self.run_with(phases, std::thread::sleep)
    }

    /// Same as [`FrameDriver::run`] with the frame wait supplied by the caller
    pub fn run_with<P, W>(&mut self, phases: &mut P, mut wait: W) -> Result<()>
    where
        P: Phases,
        W: FnMut(Duration),
    {
        while self.state == LoopState::Running {
            let frame_start = Instant::now();

            let actions = phases.handle_events()?;
            if actions.contains(&InputAction::Quit) {
                log::info!("Quitting the game after {} ticks", self.ticks);
                self.state = LoopState::Stopped;
                break;
            }

            phases.handle_game_logic(&actions);
            phases.draw_stuff()?;
            self.ticks += 1;

            // Sleep off the rest of the frame to hold the target rate
            if let Some(remaining) = self.frame_duration.checked_sub(frame_start.elapsed()) {
                wait(remaining);
            }
        }
        Ok(())
    }
}
