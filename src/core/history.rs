use crate::core::{Board, Direction, MoveRecord};

impl Board<'_> {
    /// Reverse the most recent move exactly. Returns false on empty
    /// history.
    ///
    /// No collision re-validation happens here: a move that was legal
    /// forward reverses onto cells that are free by construction. Facing
    /// is left on the undone move's direction; there is no facing stack.
    pub fn undo(&mut self) -> bool {
        let Some(MoveRecord {
            direction,
            crate_index,
        }) = self.history.pop()
        else {
            return false;
        };

        if let Some(index) = crate_index {
            // The pushed crate sits one cell past the character along the
            // recorded direction; it steps back by one.
            let restored = self.crates[index].pos.offset_back(direction);
            let on_trophy = self.level.is_trophy(restored);
            self.crates[index].pos = restored;
            self.crates[index].on_trophy = on_trophy;
        }

        // Character commits last.
        self.character_pos = self.character_pos.offset_back(direction);
        self.facing = direction;
        true
    }

    /// Back to the level's initial state: history gone, character and
    /// every crate restored by index. O(crate count), independent of how
    /// long the session ran.
    pub fn reset(&mut self) {
        self.history.clear();

        for (index, &pos) in self.level.initial_crates().iter().enumerate() {
            self.crates[index].pos = pos;
            self.crates[index].on_trophy = self.level.is_trophy(pos);
        }

        self.character_pos = self.level.initial_character();
        self.facing = Direction::Down;
    }
}
