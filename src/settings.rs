//! Session settings — user-configurable preferences consumed once at
//! session creation.

use crate::types::{GameMode, Side};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Presentation variant for the board.
///
/// Opaque to the game core: the tag travels with the settings so a host
/// can persist and restore it, but no game rule reads it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::EnumIter,
)]
pub enum BoardTheme {
    /// Flat on-screen board.
    #[default]
    Flat,
    /// Board anchored to a detected surface.
    Anchored,
}

impl BoardTheme {
    /// Returns the display label for this option.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::Anchored => "Anchored",
        }
    }

    /// Toggles between the two variants.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Flat => Self::Anchored,
            Self::Anchored => Self::Flat,
        }
    }

    /// Parses a theme from its display label, case-insensitively.
    pub fn from_label(label: &str) -> Option<Self> {
        <Self as strum::IntoEnumIterator>::iter()
            .find(|theme| theme.label().eq_ignore_ascii_case(label.trim()))
    }
}

/// Error raised when settings cannot describe a playable session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SettingsError {
    /// The board size must be at least 1.
    #[display("board size must be at least 1")]
    BoardSizeZero,
}

impl std::error::Error for SettingsError {}

/// User-configurable settings for a session.
///
/// Consumed once by [`GameSession::new`](crate::GameSession::new); the
/// core never mutates them afterward. How they are persisted is the
/// host's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// The human player's preferred side.
    pub side: Side,
    /// Single-player against the engine, or two external actors.
    pub mode: GameMode,
    /// Board side length N.
    pub board_size: usize,
    /// Presentation tag, ignored by game rules.
    pub theme: BoardTheme,
}

impl Settings {
    /// Creates settings for a playable session.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BoardSizeZero`] when `board_size` is 0.
    #[instrument]
    pub fn new(side: Side, mode: GameMode, board_size: usize) -> Result<Self, SettingsError> {
        if board_size == 0 {
            return Err(SettingsError::BoardSizeZero);
        }
        Ok(Self {
            side,
            mode,
            board_size,
            theme: BoardTheme::default(),
        })
    }

    /// Replaces the presentation tag.
    pub fn with_theme(mut self, theme: BoardTheme) -> Self {
        self.theme = theme;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            side: Side::First,
            mode: GameMode::SinglePlayer,
            board_size: 3,
            theme: BoardTheme::default(),
        }
    }
}
