use crate::core::{Direction, TileCode, Vec2};

impl Vec2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Vec2 { x, y }
    }

    /// One cell along `direction`.
    pub fn offset(self, direction: Direction) -> Self {
        let delta = direction.delta();
        Vec2 {
            x: self.x + delta.x,
            y: self.y + delta.y,
        }
    }

    /// One cell against `direction`.
    pub fn offset_back(self, direction: Direction) -> Self {
        self.offset(direction.opposite())
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub const fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0, -1),
            Direction::Down => Vec2::new(0, 1),
            Direction::Left => Vec2::new(-1, 0),
            Direction::Right => Vec2::new(1, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl TileCode {
    pub const fn from_code(code: u8) -> Option<TileCode> {
        match code {
            0 => Some(TileCode::Empty),
            1 => Some(TileCode::Wall),
            2 => Some(TileCode::Crate),
            3 => Some(TileCode::Trophy),
            4 => Some(TileCode::RedCrate),
            5 => Some(TileCode::Character),
            6 => Some(TileCode::Teleporter),
            _ => None,
        }
    }

    pub const fn code(self) -> u8 {
        self as u8
    }
}
