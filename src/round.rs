/// Round clock and outcome.
///
/// `Running` moves to `Won` or `Lost` exactly once, on the tick where the
/// remaining time reaches zero.  Terminal outcomes never change.

use std::time::Duration;

use tracing::info;

use crate::entities::{GameState, Outcome};

/// `max(0, duration - elapsed)`.
pub fn remaining_time(duration: Duration, elapsed: Duration) -> Duration {
    duration.saturating_sub(elapsed)
}

/// Update the clock to `now` (time since round start) and settle the outcome
/// once time is up.
pub fn evaluate_round(state: &GameState, now: Duration) -> GameState {
    if state.outcome.is_terminal() {
        return state.clone();
    }

    let remaining = remaining_time(state.tuning.round_duration, now);
    let outcome = if remaining > Duration::ZERO {
        Outcome::Running
    } else if state.score > state.tuning.win_threshold {
        Outcome::Won
    } else {
        Outcome::Lost
    };

    if outcome.is_terminal() {
        info!(score = state.score, ?outcome, "round over");
    }

    GameState {
        elapsed: now,
        remaining,
        outcome,
        ..state.clone()
    }
}
