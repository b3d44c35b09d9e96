//! Game session management — the aggregate root tying board, turn
//! order, rules and opponent policy together.

use crate::action::{Move, MoveError};
use crate::board::Board;
use crate::cell::Cell;
use crate::events::{EventSink, SessionEvent};
use crate::policy::{OpponentPolicy, RandomPolicy};
use crate::rules;
use crate::settings::Settings;
use crate::types::{GameMode, GameStatus, Side};
use tracing::{debug, info, instrument, warn};

/// Result of a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The game continues.
    ///
    /// `next_turn` names the side to move in two-player mode; it is
    /// `None` in single-player mode, where the engine reply already
    /// happened inside the call and no visible turn indicator flips.
    Continued {
        /// Side expected to move next, when turn order is visible.
        next_turn: Option<Side>,
    },
    /// The move completed a line; the game is over.
    Won(Side),
    /// The board filled up with no completed line; the game is over.
    Draw,
}

/// One playthrough's full mutable state, from creation to a terminal
/// outcome or reset.
///
/// The session exclusively owns its [`Board`]; rules and policies only
/// ever see read-only snapshots. All mutation goes through
/// [`GameSession::apply_move`] and [`GameSession::reset_game`].
///
/// The core is single-threaded and synchronous: `apply_move` runs to
/// completion, including any engine reply, before returning. Hosts with
/// concurrent move producers must serialize calls into the session.
pub struct GameSession {
    board: Board,
    mode: GameMode,
    human_side: Side,
    engine_side: Side,
    current_turn: Side,
    status: GameStatus,
    history: Vec<Move>,
    policy: Box<dyn OpponentPolicy>,
    sink: Option<Box<dyn EventSink>>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("mode", &self.mode)
            .field("human_side", &self.human_side)
            .field("current_turn", &self.current_turn)
            .field("status", &self.status)
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Creates a session from settings, with the default random
    /// opponent policy.
    ///
    /// The configured preferred side opens the game in both modes.
    pub fn new(settings: Settings) -> Self {
        Self::with_policy(settings, Box::new(RandomPolicy::new()))
    }

    /// Creates a session with a custom opponent policy.
    ///
    /// The policy is only consulted in single-player mode.
    pub fn with_policy(settings: Settings, policy: Box<dyn OpponentPolicy>) -> Self {
        info!(
            side = ?settings.side,
            mode = ?settings.mode,
            size = settings.board_size,
            "creating game session"
        );
        Self {
            board: Board::new(settings.board_size),
            mode: settings.mode,
            human_side: settings.side,
            engine_side: settings.side.opponent(),
            current_turn: settings.side,
            status: GameStatus::InProgress,
            history: Vec::new(),
            policy,
            sink: None,
        }
    }

    /// Attaches a notification sink; replaces any previous one.
    pub fn set_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sink = Some(sink);
    }

    /// Detaches and returns the notification sink, if any.
    pub fn take_sink(&mut self) -> Option<Box<dyn EventSink>> {
        self.sink.take()
    }

    /// Applies a move for the given side.
    ///
    /// Validation order: terminal status, turn identity (two-player
    /// only), bounds, occupancy. A rejected move leaves the session
    /// untouched.
    ///
    /// In single-player mode a successful, non-terminal human move
    /// triggers the engine's reply through this same path before the
    /// call returns, so the outcome describes the position after the
    /// reply.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] after a terminal status,
    /// [`MoveError::NotYourTurn`] for an out-of-turn two-player move,
    /// [`MoveError::OutOfBounds`] and [`MoveError::CellOccupied`]
    /// propagated from the board.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn apply_move(&mut self, cell: Cell, side: Side) -> Result<Outcome, MoveError> {
        if self.status.is_terminal() {
            warn!(%cell, ?side, "move rejected: game already over");
            return Err(MoveError::GameOver);
        }
        if self.mode == GameMode::TwoPlayer && side != self.current_turn {
            warn!(%cell, ?side, "move rejected: not this side's turn");
            return Err(MoveError::NotYourTurn(side));
        }

        self.board.place(cell, side)?;
        self.history.push(Move::new(side, cell));
        debug!(%cell, ?side, "mark placed");
        self.emit(SessionEvent::MoveMade { side, cell });

        if rules::has_won(&self.board, side) {
            self.status = GameStatus::Won(side);
            info!(winner = ?side, "game won");
            self.emit(SessionEvent::GameOver { winner: Some(side) });
            return Ok(Outcome::Won(side));
        }

        if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            info!("game drawn");
            self.emit(SessionEvent::GameOver { winner: None });
            return Ok(Outcome::Draw);
        }

        match self.mode {
            GameMode::TwoPlayer => {
                self.current_turn = self.current_turn.opponent();
                self.emit(SessionEvent::TurnChanged(self.current_turn));
                Ok(Outcome::Continued {
                    next_turn: Some(self.current_turn),
                })
            }
            GameMode::SinglePlayer if side == self.human_side => self.engine_reply(),
            GameMode::SinglePlayer => Ok(Outcome::Continued { next_turn: None }),
        }
    }

    /// Lets the opponent policy pick and apply the engine's move.
    ///
    /// Only reached when the game is still in progress, so at least one
    /// empty cell exists.
    fn engine_reply(&mut self) -> Result<Outcome, MoveError> {
        let Some(cell) = self.policy.select_move(&self.board) else {
            // Unreachable given the draw check above; answer harmlessly
            // rather than panic if a policy misbehaves.
            warn!("opponent policy returned no move on a non-full board");
            return Ok(Outcome::Continued { next_turn: None });
        };
        debug!(%cell, side = ?self.engine_side, "engine reply");
        self.apply_move(cell, self.engine_side)
    }

    /// Starts the session over: board cleared, status back to
    /// in-progress, opening turn rule reapplied. Mode, sides and board
    /// size are preserved.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board.reset();
        self.history.clear();
        self.status = GameStatus::InProgress;
        self.current_turn = self.human_side;
        info!("session reset");
    }

    fn emit(&mut self, event: SessionEvent) {
        if let Some(sink) = self.sink.as_mut() {
            sink.on_event(&event);
        }
    }

    /// The side expected to act next.
    ///
    /// In single-player mode this always reports the human side; the
    /// engine reacts inside `apply_move` without a visible turn flip.
    pub fn current_turn(&self) -> Side {
        match self.mode {
            GameMode::SinglePlayer => self.human_side,
            GameMode::TwoPlayer => self.current_turn,
        }
    }

    /// Current session status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board side length N.
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.board.empty_cells()
    }

    /// Session mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The human-controlled side.
    pub fn human_side(&self) -> Side {
        self.human_side
    }

    /// Moves applied since creation or the last reset, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}
