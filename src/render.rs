use std::io::{self, Write};

use ndarray::Array2;

use crate::agent::Snapshot;
use crate::environment::Pos;

const WALL: char = '*';
const FLOOR: char = ' ';
const VISITED: char = '.';
const FINISH: char = 'F';
const AGENT: char = '@';

pub trait Renderer {
    fn draw(&mut self, view: &Snapshot) -> io::Result<()>;
}

/// Paints one frame into a `height x width` grid of glyphs. Cells off the declared grid
/// (an agent that walked out of an unfenced maze) are not shown.
pub fn frame(view: &Snapshot) -> Array2<char> {
    let mut grid = Array2::from_elem((view.height, view.width), FLOOR);
    let mut put = |pos: Pos, glyph: char| {
        if pos.in_bounds(view.width, view.height) {
            grid[[pos.y as usize, pos.x as usize]] = glyph;
        }
    };

    for wall in view.walls.iter() {
        put(*wall, WALL);
    }
    for cell in view.visited.iter() {
        put(*cell, VISITED);
    }
    put(view.finish, FINISH);
    put(view.position, AGENT);
    grid
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    clear: bool,
}

impl<W: Write> TerminalRenderer<W> {
    /// `clear` homes the cursor and wipes the screen before each frame.
    pub fn new(out: W, clear: bool) -> Self {
        Self { out, clear }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, view: &Snapshot) -> io::Result<()> {
        let grid = frame(view);
        if self.clear {
            write!(self.out, "\x1b[2J\x1b[H")?;
        }
        for row in grid.outer_iter() {
            let line: String = row.iter().collect();
            writeln!(self.out, "{}", line.trim_end())?;
        }
        self.out.flush()
    }
}
