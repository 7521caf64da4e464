//! Game session - the application layer wiring the board to the move history.

use log::info;

use crate::config::BoardConfig;
use crate::domain::{
    GameOutcome, History, MoveRecord, Orientation, PieceKind, Point, PromotionPiece, Side,
    promotion_choices,
};
use crate::error::BoardError;
use crate::models::board::{Board, BoardInput, BoardOutput, BoardState, GameEnd};
use crate::models::frame::BoardFrame;
use crate::models::oracle::{RulesOracle, STANDARD_FEN, ShakmatyOracle};

/// What the shell needs to react to after an input
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    MoveCommitted(MoveRecord),
    /// Open the chooser with these pieces and their images
    PromotionRequested {
        side: Side,
        choices: [(PromotionPiece, &'static str); 4],
    },
    GameEnded(GameOutcome),
    /// A draw was claimed while the position allows none
    DrawRefused,
}

/// The main game model: board, history and configuration
pub struct GameSession<O = ShakmatyOracle> {
    board: Board<O>,
    history: History,
    config: BoardConfig,
    /// Measured pixel length of the drawn board
    board_length: f32,
    /// Set by a refused draw claim until the next input
    draw_refused: bool,
}

impl GameSession<ShakmatyOracle> {
    pub fn new(config: BoardConfig) -> Self {
        Self::with_oracle(ShakmatyOracle::new(), config)
    }
}

impl Default for GameSession<ShakmatyOracle> {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl<O: RulesOracle> GameSession<O> {
    pub fn with_oracle(oracle: O, config: BoardConfig) -> Self {
        Self {
            board: Board::new(oracle, config.orientation),
            history: History::default(),
            board_length: config.board_length,
            config,
            draw_refused: false,
        }
    }

    pub fn board(&self) -> &Board<O> {
        &self.board
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn board_length(&self) -> f32 {
        self.board_length
    }

    /// Follow the size the view measured.
    pub fn set_board_length(&mut self, board_length: f32) {
        if board_length.is_finite() && board_length > 0.0 {
            self.board_length = board_length;
        }
    }

    pub fn is_game_in_progress(&self) -> bool {
        self.board.is_game_in_progress()
    }

    /// Why no game is running, if none is
    pub fn game_end(&self) -> Option<GameEnd> {
        match self.board.state() {
            BoardState::GameOver(end) => Some(*end),
            _ => None,
        }
    }

    /// Whether the last draw claim was refused
    pub fn draw_refused(&self) -> bool {
        self.draw_refused
    }

    pub fn new_game(&mut self) -> Result<Vec<GameEvent>, BoardError> {
        self.new_game_from_fen(STANDARD_FEN)
    }

    /// Start a game from a custom position. A malformed position leaves the
    /// board and the history as they were. A position that is already over
    /// reports `GameEnded` straight away.
    pub fn new_game_from_fen(&mut self, fen: &str) -> Result<Vec<GameEvent>, BoardError> {
        let outputs = self.board.start_game(fen)?;
        self.draw_refused = false;
        self.history.reset(self.board.oracle().position_notation());
        Ok(self.dispatch(outputs))
    }

    pub fn stop_game(&mut self) -> bool {
        self.draw_refused = false;
        self.board.stop()
    }

    /// Claim a draw. Without a game this does nothing; with one, a position
    /// that allows no draw yields `DrawRefused`.
    pub fn claim_draw(&mut self) -> Vec<GameEvent> {
        if !self.is_game_in_progress() {
            return Vec::new();
        }
        let outputs = self.board.claim_draw();
        if outputs.is_empty() {
            self.draw_refused = true;
            return vec![GameEvent::DrawRefused];
        }
        self.draw_refused = false;
        self.dispatch(outputs)
    }

    pub fn orientation(&self) -> Orientation {
        self.board.orientation()
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.board.set_orientation(orientation);
    }

    pub fn flip_orientation(&mut self) {
        let flipped = self.board.orientation().flipped();
        info!("board flipped to {flipped:?}");
        self.board.set_orientation(flipped);
    }

    pub fn pointer_down(&mut self, point: Point) -> Vec<GameEvent> {
        let board_length = self.board_length;
        self.handle(BoardInput::PointerDown { point, board_length })
    }

    pub fn pointer_move(&mut self, point: Point) -> Vec<GameEvent> {
        let board_length = self.board_length;
        self.handle(BoardInput::PointerMove { point, board_length })
    }

    pub fn pointer_up(&mut self, point: Point) -> Vec<GameEvent> {
        let board_length = self.board_length;
        self.handle(BoardInput::PointerUp { point, board_length })
    }

    pub fn choose_promotion(&mut self, kind: PieceKind) -> Vec<GameEvent> {
        self.handle(BoardInput::ChoosePromotion(kind))
    }

    pub fn dismiss_promotion(&mut self) -> Vec<GameEvent> {
        self.handle(BoardInput::DismissPromotion)
    }

    /// Show the position after move `index`; `false` while a game is running.
    pub fn select_move(&mut self, index: usize) -> bool {
        let board = &mut self.board;
        self.history
            .request_selection(index, |record| board.request_history_position(record))
    }

    pub fn go_to_start(&mut self) -> bool {
        let board = &mut self.board;
        self.history
            .request_first(|record| board.request_history_position(record))
    }

    pub fn go_back(&mut self) -> bool {
        let board = &mut self.board;
        self.history
            .request_previous(|record| board.request_history_position(record))
    }

    pub fn go_forward(&mut self) -> bool {
        let board = &mut self.board;
        self.history
            .request_next(|record| board.request_history_position(record))
    }

    pub fn go_to_end(&mut self) -> bool {
        let board = &mut self.board;
        self.history
            .request_last(|record| board.request_history_position(record))
    }

    pub fn frame(&self) -> BoardFrame {
        BoardFrame::capture(&self.board, self.board_length, &self.config.arrow)
    }

    fn handle(&mut self, input: BoardInput) -> Vec<GameEvent> {
        self.draw_refused = false;
        let outputs = self.board.handle(input);
        self.dispatch(outputs)
    }

    fn dispatch(&mut self, outputs: Vec<BoardOutput>) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for output in outputs {
            match output {
                BoardOutput::MoveCommitted(record) => {
                    self.history.append_move(record.clone());
                    events.push(GameEvent::MoveCommitted(record));
                }
                BoardOutput::PromotionRequested(side) => {
                    events.push(GameEvent::PromotionRequested {
                        side,
                        choices: promotion_choices(side),
                    });
                }
                BoardOutput::SelectLatestHistory => {
                    self.go_to_end();
                }
                BoardOutput::GameEnded(outcome) => events.push(GameEvent::GameEnded(outcome)),
            }
        }
        events
    }
}
