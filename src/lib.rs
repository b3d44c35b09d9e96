//! Turn-based grid game core for tic-tac-toe-style play.
//!
//! Supports variable board sizes, single-player (the engine plays one
//! side) and two-player modes, and line-based win/draw evaluation. The
//! crate is an embeddable library: hosts feed it move requests and
//! configuration and receive outcomes and state-change events; it knows
//! nothing about rendering, input devices or settings storage.
//!
//! # Architecture
//!
//! - **Board**: N×N grid of marks with bounds and occupancy invariants
//! - **Rules**: pure win/draw evaluation over a board snapshot
//! - **Session**: the turn state machine orchestrating moves and outcomes
//! - **Policy**: move selection for the engine-controlled side
//!
//! # Example
//!
//! ```
//! use gridplay::{Cell, GameMode, GameSession, Outcome, Settings, Side};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::new(Side::First, GameMode::TwoPlayer, 3)?;
//! let mut session = GameSession::new(settings);
//!
//! let outcome = session.apply_move(Cell::new(0, 0), Side::First)?;
//! assert_eq!(outcome, Outcome::Continued { next_turn: Some(Side::Second) });
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod cell;
mod events;
mod policy;
mod rules;
mod session;
mod settings;
mod types;

// Crate-level exports - moves and errors
pub use action::{Move, MoveError};

// Crate-level exports - board state
pub use board::Board;
pub use cell::Cell;

// Crate-level exports - notifications
pub use events::{EventSink, SessionEvent};

// Crate-level exports - opponent policies
pub use policy::{FirstEmptyPolicy, OpponentPolicy, RandomPolicy};

// Crate-level exports - rules
pub use rules::{has_won, is_full};

// Crate-level exports - session state machine
pub use session::{GameSession, Outcome};

// Crate-level exports - configuration
pub use settings::{BoardTheme, Settings, SettingsError};

// Crate-level exports - domain types
pub use types::{GameMode, GameStatus, Mark, Side};
