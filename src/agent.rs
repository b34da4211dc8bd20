use std::collections::HashSet;

use ordered_float::OrderedFloat;
use tracing::debug;

use crate::environment::{
    distance,
    Env,
    Movement,
    Perception,
    Pos,
};


/// What a single call to [`Agent::step`] did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    /// Moved into a cell not seen before; the movement was pushed on the stack.
    Advanced(Movement),
    /// Dead end: retraced one step using the opposite of the popped movement.
    Backtracked(Movement),
    /// No legal move. Terminal.
    Trapped,
}

impl Step {
    pub fn movement(self) -> Option<Movement> {
        match self {
            Step::Advanced(m) | Step::Backtracked(m) => Some(m),
            Step::Trapped => None,
        }
    }
}

/// Read-only view handed to a renderer each frame.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub width: usize,
    pub height: usize,
    pub walls: &'a HashSet<Pos>,
    pub finish: Pos,
    pub position: Pos,
    pub visited: &'a HashSet<Pos>,
}

/// Depth-first explorer that prefers the unvisited neighbour closest to the finish
/// and walks back along its own path when every neighbour is already visited.
pub struct Agent<'a> {
    env: &'a Env,
    pub pos: Pos,
    visited: HashSet<Pos>,
    trapped: bool,
    stack: Vec<Movement>,
}

impl<'a> Agent<'a> {
    pub fn new(env: &'a Env) -> Self
    {
        let pos = env.start_pos();
        let mut visited = HashSet::new();
        visited.insert(pos);
        Self {
            env,
            pos,
            visited,
            trapped: false,
            stack: Vec::new(),
        }
    }

    pub fn env(&self) -> &'a Env { self.env }

    pub fn visited(&self) -> &HashSet<Pos> { &self.visited }

    pub fn is_trapped(&self) -> bool { self.trapped }

    pub fn reached_goal(&self) -> bool {
        self.pos == self.env.finish_pos()
    }

    /// Length of the path from the start in the search tree.
    pub fn stack_depth(&self) -> usize { self.stack.len() }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            width: self.env.width(),
            height: self.env.height(),
            walls: self.env.walls(),
            finish: self.env.finish_pos(),
            position: self.pos,
            visited: &self.visited,
        }
    }

    pub fn step(&mut self) -> Step
    {
        if self.trapped {
            return Step::Trapped;
        }

        let percepts: Vec<(Movement, Perception)> = Movement::ALL
            .iter()
            .map(|a| (*a, self.env.perceive(self.pos, *a)))
            .collect();

        let step = match self.decide(&percepts) {
            Some(step) => step,
            None => {
                debug!("Agent trapped at {:?}", self.pos);
                self.trapped = true;
                return Step::Trapped;
            }
        };

        let movement = match step.movement() {
            Some(m) => m,
            None => return step,
        };
        self.pos = movement.apply(self.pos);
        // Backtracking lands on a visited cell, so this only grows on forward moves.
        self.visited.insert(self.pos);
        debug!("{:?} -> {:?} (depth {})", step, self.pos, self.stack.len());
        step
    }

    fn decide(&mut self, percepts: &[(Movement, Perception)]) -> Option<Step>
    {
        let options: Vec<&(Movement, Perception)> = percepts.iter()
            .filter(|(_, p)| !p.is_wall)
            .collect();
        if options.is_empty() {
            return None;
        }

        let mut unvisited: Vec<&(Movement, Perception)> = options.into_iter()
            .filter(|(_, p)| !self.visited.contains(&p.position))
            .collect();

        let decision = match unvisited.len() {
            0 => {
                // Popping past the start means the whole reachable region is exhausted.
                let last = self.stack.pop()?;
                return Some(Step::Backtracked(last.opposite()));
            }
            1 => unvisited[0].0,
            _ => {
                let finish = self.env.finish_pos();
                // Stable: equal distances keep Movement::ALL order.
                unvisited.sort_by_key(|(_, p)| OrderedFloat(distance(p.position, finish)));
                unvisited[0].0
            }
        };

        self.stack.push(decision);
        Some(Step::Advanced(decision))
    }
}
