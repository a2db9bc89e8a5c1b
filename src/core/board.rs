use crate::core::{CrateState, Direction, Level, MoveRecord, Vec2};

/// Live, mutable simulation state for one attempt at a level.
///
/// The board exclusively owns the character, the crates and the move
/// history; the level itself stays borrowed and read-only.
pub struct Board<'a> {
    pub(crate) level: &'a Level,
    pub(crate) character_pos: Vec2,
    pub(crate) facing: Direction,
    pub(crate) crates: Vec<CrateState>,
    pub(crate) history: Vec<MoveRecord>,
}

impl<'a> Board<'a> {
    /// Fresh board: character at the level's start cell, crates in level
    /// scan order (that order is their identity), facing down, no history.
    pub fn new_game(level: &'a Level) -> Self {
        let crates = level
            .initial_crates()
            .iter()
            .map(|&pos| CrateState {
                pos,
                on_trophy: level.is_trophy(pos),
            })
            .collect();

        Board {
            level,
            character_pos: level.initial_character(),
            facing: Direction::Down,
            crates,
            history: Vec::new(),
        }
    }

    /// Outside the grid, or a wall.
    pub fn is_blocked(&self, pos: Vec2) -> bool {
        !self.level.contains(pos) || self.level.is_wall(pos)
    }

    /// Index of the crate occupying `pos`, if any. Boards are small, so a
    /// linear scan is all this needs.
    pub fn crate_at(&self, pos: Vec2) -> Option<usize> {
        self.crates.iter().position(|c| c.pos == pos)
    }

    pub fn character_pos(&self) -> Vec2 {
        self.character_pos
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn crates(&self) -> &[CrateState] {
        &self.crates
    }

    /// Successful moves currently on the undo stack.
    pub fn moves_made(&self) -> usize {
        self.history.len()
    }

    pub fn level(&self) -> &Level {
        self.level
    }

    /// True iff every trophy cell holds some crate. Recomputed on demand,
    /// never cached.
    pub fn is_solved(&self) -> bool {
        self.level
            .trophies()
            .iter()
            .all(|&trophy| self.crates.iter().any(|c| c.pos == trophy))
    }
}
