use crate::core::MoveOutcome;

/// Loop-side snapshot handed to the renderer each frame, alongside the
/// board itself.
pub struct RenderState {
    pub level_name: String,
    pub won: bool,
    pub last_outcome: Option<MoveOutcome>,
    pub moves_made: usize,
}
