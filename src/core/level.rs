use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::consts::GRID_SIZE;
use crate::core::{TileCode, Vec2};

/// Why a level file was rejected. Parsing is all-or-nothing: on any error
/// the caller gets one of these and no partial level.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum ParseError {
    #[error("expected {} rows, found {0}", GRID_SIZE)]
    WrongRowCount(usize),
    #[error("row {row}: expected {} tiles, found {found}", GRID_SIZE)]
    WrongColumnCount { row: usize, found: usize },
    #[error("row {row}, column {col}: not a legal tile code")]
    InvalidToken { row: usize, col: usize },
    #[error("level has no character start tile")]
    MissingCharacter,
}

/// Immutable result of parsing a level file: the static wall layout plus
/// the initial entity positions a board is instantiated from.
///
/// Crate order is the order the scan found them in, and doubles as crate
/// identity on the board.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Level {
    wall_mask: Vec<Vec<bool>>,
    initial_character: Vec2,
    initial_crates: Vec<Vec2>,
    trophies: Vec<Vec2>,
}

impl Level {
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < GRID_SIZE && (pos.y as usize) < GRID_SIZE
    }

    pub fn is_wall(&self, pos: Vec2) -> bool {
        self.contains(pos) && self.wall_mask[pos.y as usize][pos.x as usize]
    }

    pub fn is_trophy(&self, pos: Vec2) -> bool {
        self.trophies.contains(&pos)
    }

    pub fn initial_character(&self) -> Vec2 {
        self.initial_character
    }

    pub fn initial_crates(&self) -> &[Vec2] {
        &self.initial_crates
    }

    pub fn trophies(&self) -> &[Vec2] {
        &self.trophies
    }

    /// Re-serialize to the plain grid format. `parse` of the result
    /// reproduces this level exactly.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let pos = Vec2::new(col as i32, row as i32);
                let code = if self.wall_mask[row][col] {
                    TileCode::Wall
                } else if self.initial_crates.contains(&pos) {
                    TileCode::Crate
                } else if self.trophies.contains(&pos) {
                    TileCode::Trophy
                } else if self.initial_character == pos {
                    TileCode::Character
                } else {
                    TileCode::Empty
                };
                if col > 0 {
                    out.push(',');
                }
                out.push((b'0' + code.code()) as char);
            }
            out.push('\n');
        }
        out
    }
}

/// Parse a level from the plain grid format: `GRID_SIZE` lines of
/// `GRID_SIZE` comma-separated tile codes.
///
/// Crate, trophy and character codes are extracted into their position
/// lists; the cell they occupied is empty in the wall mask. The wall mask
/// is true exactly where the raw code was `Wall`.
pub fn parse(raw_text: &str) -> Result<Level, ParseError> {
    let lines: Vec<&str> = raw_text.lines().collect();
    if lines.len() != GRID_SIZE {
        return Err(ParseError::WrongRowCount(lines.len()));
    }

    let mut wall_mask = vec![vec![false; GRID_SIZE]; GRID_SIZE];
    let mut initial_crates = Vec::new();
    let mut trophies = Vec::new();
    let mut character = None;

    for (row, line) in lines.iter().enumerate() {
        let tokens: Vec<&str> = line.split(',').collect();
        if tokens.len() != GRID_SIZE {
            return Err(ParseError::WrongColumnCount {
                row,
                found: tokens.len(),
            });
        }

        for (col, token) in tokens.iter().enumerate() {
            let code = token
                .trim()
                .parse::<u8>()
                .ok()
                .and_then(TileCode::from_code)
                // Teleporter is reserved vocabulary; legal input stops at
                // the character code.
                .filter(|&code| !matches!(code, TileCode::Teleporter))
                .ok_or(ParseError::InvalidToken { row, col })?;

            let pos = Vec2::new(col as i32, row as i32);
            match code {
                TileCode::Wall => wall_mask[row][col] = true,
                TileCode::Crate => initial_crates.push(pos),
                TileCode::Trophy => trophies.push(pos),
                // Last character tile wins; earlier ones stay empty cells.
                TileCode::Character => character = Some(pos),
                // RedCrate is in-range but inert as input; Teleporter was
                // filtered out above.
                TileCode::Empty | TileCode::RedCrate | TileCode::Teleporter => {}
            }
        }
    }

    let initial_character = character.ok_or(ParseError::MissingCharacter)?;

    Ok(Level {
        wall_mask,
        initial_character,
        initial_crates,
        trophies,
    })
}
