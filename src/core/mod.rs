mod board;
mod consts;
mod history;
mod level;
mod model_helpers;
mod models;
mod update;

pub use board::Board;
pub use consts::*;
pub use level::{Level, ParseError, parse};
pub use models::{CrateState, Direction, MoveOutcome, MoveRecord, TileCode, Vec2};
