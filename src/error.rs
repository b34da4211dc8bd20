use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("cannot read map file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("map has no cells")]
    Empty,
    #[error("unknown character {glyph:?} in map at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: i32, y: i32 },
}
