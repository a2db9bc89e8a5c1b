pub use dissimilar::diff as __diff;

use crate::console_interface::render_board_to_string;
use crate::core::{Board, Direction, GRID_SIZE, Level, MoveOutcome, parse};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

/// Expand a compact ASCII sketch into the real level format: `GRID_SIZE`
/// lines of comma-separated tile codes, the sketch anchored top-left and
/// padded with empty cells.
///
/// Legend matches the renderer: '#' wall, '$' crate, '.' trophy,
/// '@' character, ' ' empty.
pub fn level_text_from_sketch(sketch: &str) -> String {
    let rows: Vec<Vec<u8>> = sketch
        .lines()
        .skip_while(|line| line.is_empty())
        .map(|line| {
            line.chars()
                .map(|ch| match ch {
                    ' ' => 0,
                    '#' => 1,
                    '$' => 2,
                    '.' => 3,
                    '@' => 5,
                    other => panic!("unknown sketch tile {other:?}"),
                })
                .collect()
        })
        .collect();
    assert!(rows.len() <= GRID_SIZE, "sketch has too many rows");

    let mut out = String::new();
    for row in 0..GRID_SIZE {
        let codes = rows.get(row).map(Vec::as_slice).unwrap_or(&[]);
        assert!(codes.len() <= GRID_SIZE, "sketch row {row} is too wide");
        for col in 0..GRID_SIZE {
            if col > 0 {
                out.push(',');
            }
            out.push((b'0' + codes.get(col).copied().unwrap_or(0)) as char);
        }
        out.push('\n');
    }
    out
}

/// Fixture owning a parsed level and a live board for it.
pub struct GameTestState {
    pub level: &'static Level,
    pub board: Board<'static>,
}

impl GameTestState {
    pub fn new(sketch: &str) -> Self {
        let text = level_text_from_sketch(sketch);
        let level = parse(&text).unwrap_or_else(|err| panic!("sketch does not parse: {err}"));
        // Test levels live for the whole process.
        let level: &'static Level = Box::leak(Box::new(level));
        GameTestState {
            level,
            board: Board::new_game(level),
        }
    }

    pub fn board_to_string(&self) -> String {
        let full = render_board_to_string(&self.board);
        let mut rows: Vec<&str> = full.lines().map(str::trim_end).collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        rows.join("\n")
    }

    pub fn assert_move(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.board.attempt_move(direction);
        assert!(
            matches!(outcome, MoveOutcome::Moved { .. }),
            "expected move {:?} to succeed, in map\n{}",
            direction,
            self.board_to_string()
        );
        outcome
    }

    pub fn assert_moves(&mut self, directions: &[Direction]) {
        for &direction in directions {
            self.assert_move(direction);
        }
    }

    pub fn try_move(&mut self, direction: Direction) -> MoveOutcome {
        self.board.attempt_move(direction)
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.board_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str());
    }
}
