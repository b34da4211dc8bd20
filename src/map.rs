use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::environment::{Env, Pos};
use crate::error::MapError;

/// What to do with a character that is neither floor, wall nor spawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnknownGlyph {
    /// Log it and treat the cell as empty.
    Warn,
    /// Abort parsing with `MapError::UnknownGlyph`.
    Reject,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Legend {
    pub wall: char,
    pub spawn: char,
    pub unknown: UnknownGlyph,
}

impl Default for Legend {
    fn default() -> Self {
        Legend {
            wall: '*',
            spawn: '#',
            unknown: UnknownGlyph::Warn,
        }
    }
}

pub fn load_map<P: AsRef<Path>, R: Rng + ?Sized>(path: P, legend: &Legend, rng: &mut R) -> Result<Env, MapError>
{
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read map {}", path.display());
    parse_map(text.lines(), legend, rng)
}

/// Builds an environment from grid rows, top row first.
///
/// Start and finish come from the spawn glyphs when there are at least two. With one spawn
/// glyph it becomes the start and the finish is drawn at random; with none, both are drawn.
/// Random draws reject walls and retry without bound, so a map made only of walls never returns.
pub fn parse_map<I, S, R>(lines: I, legend: &Legend, rng: &mut R) -> Result<Env, MapError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut width = 0;
    let mut height = 0;
    let mut walls = HashSet::new();
    let mut spawn = BTreeSet::new();

    for (y, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let mut row_len = 0;
        for (x, glyph) in line.chars().enumerate() {
            let pos = Pos::new(x as i32, y as i32);
            row_len += 1;
            if glyph == ' ' {
                continue;
            } else if glyph == legend.wall {
                walls.insert(pos);
            } else if glyph == legend.spawn {
                spawn.insert(pos);
            } else {
                match legend.unknown {
                    UnknownGlyph::Warn => warn!("unknown character in map: {:?} at ({}, {})", glyph, pos.x, pos.y),
                    UnknownGlyph::Reject => return Err(MapError::UnknownGlyph { glyph, x: pos.x, y: pos.y }),
                }
            }
        }
        width = width.max(row_len);
        height = y + 1;
    }

    if width == 0 || height == 0 {
        return Err(MapError::Empty);
    }

    let (start, finish) = match spawn.len() {
        0 => {
            let start = sample_open_cell(width, height, &walls, rng);
            let finish = sample_open_cell(width, height, &walls, rng);
            (start, finish)
        }
        1 => {
            let start = *spawn.iter().next().ok_or(MapError::Empty)?;
            let finish = sample_open_cell(width, height, &walls, rng);
            (start, finish)
        }
        _ => {
            let mut candidates: Vec<Pos> = spawn.into_iter().collect();
            candidates.shuffle(rng);
            // At least two candidates, so both pops succeed.
            let start = candidates.pop().ok_or(MapError::Empty)?;
            let finish = candidates.pop().ok_or(MapError::Empty)?;
            (start, finish)
        }
    };

    debug!(
        "Map {}x{} with {} walls, start {:?}, finish {:?}",
        width, height, walls.len(), start, finish
    );
    Ok(Env::new(width, height, walls, start, finish))
}

fn sample_open_cell<R: Rng + ?Sized>(width: usize, height: usize, walls: &HashSet<Pos>, rng: &mut R) -> Pos {
    loop {
        let pos = Pos::new(rng.gen_range(0..width) as i32, rng.gen_range(0..height) as i32);
        if !walls.contains(&pos) {
            return pos;
        }
    }
}
