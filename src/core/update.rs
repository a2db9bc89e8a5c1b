use crate::core::{Board, Direction, MoveOutcome, MoveRecord};

impl Board<'_> {
    /// Resolve one input direction against the current state.
    ///
    /// Facing follows the input unconditionally, blocked or not. A push is
    /// single-level: the one crate adjacent to the character may move, and
    /// a crate with a wall or another crate behind it rejects the whole
    /// move. Only successful moves enter the history.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveOutcome {
        self.facing = direction;

        let target = self.character_pos.offset(direction);
        if self.is_blocked(target) {
            return MoveOutcome::Blocked;
        }

        let mut crate_index = None;
        if let Some(index) = self.crate_at(target) {
            let crate_target = target.offset(direction);
            if self.is_blocked(crate_target) || self.crate_at(crate_target).is_some() {
                return MoveOutcome::Blocked;
            }
            let on_trophy = self.level.is_trophy(crate_target);
            self.crates[index].pos = crate_target;
            self.crates[index].on_trophy = on_trophy;
            crate_index = Some(index);
        }

        self.character_pos = target;
        self.history.push(MoveRecord {
            direction,
            crate_index,
        });
        MoveOutcome::Moved {
            pushed: crate_index.is_some(),
        }
    }
}
