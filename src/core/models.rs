use serde::{Deserialize, Serialize};

/// Static tile vocabulary of the level format, in tile-code order.
///
/// `RedCrate` and `Teleporter` are reserved codes. A red crate is what the
/// front-end shows for a crate sitting on a trophy (the engine models that
/// as [`CrateState::on_trophy`]), and teleporters are not accepted from
/// level files at all.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TileCode {
    Empty,
    Wall,
    Crate,
    Trophy,
    RedCrate,
    Character,
    Teleporter,
}

/// Grid coordinates: `x` is the column, `y` the row, origin top-left.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A crate on the live board. Its index in the board's crate list is its
/// identity for the whole session; the history refers to crates by index
/// only.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CrateState {
    pub pos: Vec2,
    pub on_trophy: bool,
}

/// One successful forward move, sufficient to reverse it exactly.
/// `crate_index` is set iff the move pushed that crate.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MoveRecord {
    pub direction: Direction,
    pub crate_index: Option<usize>,
}

/// Result of a move attempt. A blocked move is a normal outcome, not an
/// error.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MoveOutcome {
    Moved { pushed: bool },
    Blocked,
}
