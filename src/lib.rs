//! Interactive chessboard input surface.
//!
//! Turns raw pointer gestures into committed chess moves, arbitrates pawn
//! promotion, tracks the last-move indicator and lets a user browse the move
//! history of a finished game.
//!
//! The `domain` and `models` layers are UI independent. The gpui desktop shell
//! lives in `ui` and `app` and is only built with the `gui` feature.

pub mod config;
pub mod domain;
pub mod error;
pub mod models;

#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
pub mod ui;

pub use config::{ArrowStyle, BoardConfig};
pub use error::BoardError;
pub use models::{BoardFrame, GameEvent, GameSession, RulesOracle, ShakmatyOracle};
