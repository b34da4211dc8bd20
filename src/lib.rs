pub mod agent;
pub mod config;
pub mod driver;
pub mod environment;
pub mod error;
pub mod map;
pub mod render;

pub use agent::{Agent, Snapshot, Step};
pub use environment::{Env, Movement, Perception, Pos};
pub use error::MapError;
