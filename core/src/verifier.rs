//! Verification of lifecycle state transitions.
//!
//! The platform returns the whole change history on every lifecycle query,
//! with no ordering or exclusivity guarantee, so the latest transition is
//! recomputed from timestamps on every check rather than read off the end
//! of the array.

use crate::history::StateChangeHistory;
use crate::state::LifecycleState;

/// Check that the most recent transition in `history` is
/// `expected_old` → `expected_new`.
///
/// The most recent transition is the event with the maximal timestamp
/// (linear scan, first maximal wins on ties). An empty history yields
/// `false`: no transition occurred, so none can match. This function never
/// fails on well-formed input; only parsing can.
#[must_use]
pub fn verify_transition(
    history: &StateChangeHistory,
    expected_old: LifecycleState,
    expected_new: LifecycleState,
) -> bool {
    history.latest().is_some_and(|latest| {
        latest.old_state == expected_old && latest.new_state == expected_new
    })
}
