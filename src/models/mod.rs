//! Application layer: the rules oracle, the board state machine and the game
//! session tying the board to the move history.

pub mod board;
pub mod frame;
pub mod game;
pub mod oracle;

pub use board::{Board, BoardInput, BoardOutput, BoardState, DragSession, GameEnd, PendingPromotion};
pub use frame::{BoardFrame, CellHighlight};
pub use game::{GameEvent, GameSession};
pub use oracle::{RulesOracle, STANDARD_FEN, ShakmatyOracle};
