//! Notifications emitted by a session for a host's feedback channel.

use crate::cell::Cell;
use crate::types::Side;

/// State-change notification emitted by a session.
///
/// The host renders these (as text, highlights, whatever fits) with no
/// further game-semantic interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A mark was placed.
    MoveMade {
        /// The side that moved.
        side: Side,
        /// Where the mark landed.
        cell: Cell,
    },
    /// The turn passed to the other side (two-player mode only).
    TurnChanged(Side),
    /// The game reached a terminal status.
    GameOver {
        /// The winning side, or `None` for a draw.
        winner: Option<Side>,
    },
}

/// Receives session events.
///
/// Implemented by the presentation layer; delivery is synchronous and
/// happens inside `apply_move`, before it returns.
pub trait EventSink {
    /// Called once per emitted event, in emission order.
    fn on_event(&mut self, event: &SessionEvent);
}

/// Event recorder, mainly useful in tests and simple hosts.
impl EventSink for Vec<SessionEvent> {
    fn on_event(&mut self, event: &SessionEvent) {
        self.push(*event);
    }
}
