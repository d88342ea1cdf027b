use crate::game::moves::Move;
use crate::game::view::RoundInfo;

/// The decision-making collaborator supplied by the caller. The engine hands
/// it a read-only snapshot and expects a move back; it never receives write
/// access to engine state.
pub trait Agent {
    fn decide(&mut self, view: &RoundInfo) -> Move;
}
