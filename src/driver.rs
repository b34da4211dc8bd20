use std::io;
use std::thread;
use std::time::Duration;

use tracing::info;

use crate::agent::{Agent, Step};
use crate::render::Renderer;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reached { steps: usize },
    Trapped { steps: usize },
}

pub struct Driver<R: Renderer> {
    renderer: R,
    frame_time: Duration,
}

impl<R: Renderer> Driver<R> {
    pub fn new(renderer: R, frame_time: Duration) -> Self {
        Self { renderer, frame_time }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Draws a frame, waits, then advances the agent once, until it reaches the finish or
    /// gets trapped. The final state is drawn once more before returning.
    pub fn run(&mut self, agent: &mut Agent) -> io::Result<Outcome>
    {
        let mut steps = 0;
        let outcome = loop {
            if agent.reached_goal() {
                info!("The goal has been reached.");
                break Outcome::Reached { steps };
            }

            self.renderer.draw(&agent.snapshot())?;
            if !self.frame_time.is_zero() {
                thread::sleep(self.frame_time);
            }

            if let Step::Trapped = agent.step() {
                info!("Agent is trapped.");
                break Outcome::Trapped { steps };
            }
            steps += 1;
        };

        self.renderer.draw(&agent.snapshot())?;
        Ok(outcome)
    }
}
