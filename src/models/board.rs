//! Board interaction state machine.
//!
//! Pointer gestures come in as `BoardInput`, the board answers with the
//! `BoardOutput` events they caused. Each input runs one transition
//! `(state, input) -> (state, outputs)` to completion.

use log::{debug, info, warn};

use crate::domain::notation::san_to_fan;
use crate::domain::{
    BoardGeometry, Cell, DrawKind, GameOutcome, MoveCandidate, MoveRecord, Orientation, Piece,
    PieceKind, Point, PromotionConstraint, PromotionPiece, Side, find_move, is_promotion_drop,
};
use crate::error::BoardError;
use crate::models::oracle::RulesOracle;

/// A piece drag in flight
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub start: Cell,
    /// Cell under the pointer; may be off the board
    pub end: Cell,
    pub piece: Piece,
    /// Top-left corner of the dragged piece image
    pub ghost: Point,
}

/// A promotion drop waiting for the user to pick a piece
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingPromotion {
    pub from: Cell,
    pub to: Cell,
    pub side: Side,
}

/// Why no game is in progress
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEnd {
    NotStarted,
    Stopped,
    Finished(GameOutcome),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoardState {
    Idle,
    Dragging(DragSession),
    PendingPromotion(PendingPromotion),
    GameOver(GameEnd),
}

/// Raw input from the shell. Pointer coordinates are relative to the board's
/// top-left corner, margins included.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoardInput {
    PointerDown { point: Point, board_length: f32 },
    PointerMove { point: Point, board_length: f32 },
    PointerUp { point: Point, board_length: f32 },
    ChoosePromotion(PieceKind),
    DismissPromotion,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BoardOutput {
    MoveCommitted(MoveRecord),
    /// Show the promotion chooser for this side
    PromotionRequested(Side),
    /// Select the most recent history entry before the game end is shown
    SelectLatestHistory,
    GameEnded(GameOutcome),
}

pub struct Board<O> {
    oracle: O,
    state: BoardState,
    orientation: Orientation,
    last_move: Option<(Cell, Cell)>,
}

impl<O: RulesOracle> Board<O> {
    /// A board with no game in progress.
    pub fn new(oracle: O, orientation: Orientation) -> Self {
        Self {
            oracle,
            state: BoardState::GameOver(GameEnd::NotStarted),
            orientation,
            last_move: None,
        }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn last_move(&self) -> Option<(Cell, Cell)> {
        self.last_move
    }

    pub fn is_game_in_progress(&self) -> bool {
        !matches!(self.state, BoardState::GameOver(_))
    }

    /// Whether the shown position may be replaced from the history
    pub fn can_navigate(&self) -> bool {
        !self.is_game_in_progress()
    }

    /// Start a game from `fen`. On a malformed position nothing changes.
    ///
    /// A position that is already decided (mate, stalemate, dead material)
    /// ends the game right away and reports `GameEnded`.
    pub fn start_game(&mut self, fen: &str) -> Result<Vec<BoardOutput>, BoardError> {
        self.oracle.load_position(fen)?;
        self.last_move = None;
        info!("new game from {fen}");

        let outcome = self.oracle.outcome();
        if outcome.is_terminal() {
            info!("game over at start: {outcome:?}");
            self.state = BoardState::GameOver(GameEnd::Finished(outcome));
            return Ok(vec![BoardOutput::GameEnded(outcome)]);
        }
        self.state = BoardState::Idle;
        Ok(Vec::new())
    }

    /// Stop the running game. Returns `false` when none is in progress.
    pub fn stop(&mut self) -> bool {
        if !self.is_game_in_progress() {
            return false;
        }
        self.state = BoardState::GameOver(GameEnd::Stopped);
        info!("game stopped");
        true
    }

    /// Claim a draw for the side to move, threefold repetition first.
    /// A refused claim changes nothing and returns no events.
    pub fn claim_draw(&mut self) -> Vec<BoardOutput> {
        if !self.is_game_in_progress() {
            return Vec::new();
        }
        let eligible = self.oracle.eligible_draws();
        let Some(kind) = [DrawKind::ThreefoldRepetition, DrawKind::FiftyMoveRule]
            .into_iter()
            .find(|kind| eligible.contains(kind))
        else {
            debug!("draw claim refused");
            return Vec::new();
        };

        if let Err(e) = self.oracle.claim_draw(kind) {
            warn!("draw claim failed: {e}");
            return Vec::new();
        }
        info!("draw claimed by {kind}");
        self.state = BoardState::GameOver(GameEnd::Finished(GameOutcome::Draw));
        vec![
            BoardOutput::SelectLatestHistory,
            BoardOutput::GameEnded(GameOutcome::Draw),
        ]
    }

    /// Show a position from the history. Only accepted while no game is in
    /// progress; a malformed position is logged and refused.
    pub fn request_history_position(&mut self, record: &MoveRecord) -> bool {
        if !self.can_navigate() {
            return false;
        }
        if let Err(e) = self.oracle.load_position(&record.fen) {
            warn!("cannot show history position: {e}");
            return false;
        }
        self.last_move = (record.from.is_on_board() && record.to.is_on_board())
            .then_some((record.from, record.to));
        true
    }

    pub fn handle(&mut self, input: BoardInput) -> Vec<BoardOutput> {
        let state = std::mem::replace(&mut self.state, BoardState::Idle);
        let (next, outputs) = self.transition(state, input);
        self.state = next;
        outputs
    }

    fn transition(&mut self, state: BoardState, input: BoardInput) -> (BoardState, Vec<BoardOutput>) {
        match (state, input) {
            (BoardState::GameOver(end), _) => (BoardState::GameOver(end), Vec::new()),

            (BoardState::Idle, BoardInput::PointerDown { point, board_length }) => {
                match self.begin_drag(point, board_length) {
                    Some(session) => (BoardState::Dragging(session), Vec::new()),
                    None => (BoardState::Idle, Vec::new()),
                }
            }

            (BoardState::Dragging(mut session), BoardInput::PointerMove { point, board_length }) => {
                self.track(&mut session, point, board_length);
                (BoardState::Dragging(session), Vec::new())
            }

            (BoardState::Dragging(mut session), BoardInput::PointerUp { point, board_length }) => {
                self.track(&mut session, point, board_length);
                self.drop_piece(session)
            }

            (BoardState::PendingPromotion(pending), BoardInput::ChoosePromotion(kind)) => {
                match PromotionPiece::try_from(kind) {
                    Ok(piece) => self.promote(pending, piece),
                    Err(e) => {
                        warn!("ignoring promotion choice: {e}");
                        (BoardState::PendingPromotion(pending), Vec::new())
                    }
                }
            }

            (BoardState::PendingPromotion(_), BoardInput::DismissPromotion) => {
                debug!("promotion dismissed");
                (BoardState::Idle, Vec::new())
            }

            (state, _) => (state, Vec::new()),
        }
    }

    fn begin_drag(&self, point: Point, board_length: f32) -> Option<DragSession> {
        let geometry = BoardGeometry::new(board_length, self.orientation);
        let cell = geometry.resolve(point)?;
        let piece = self.oracle.piece_at(cell)?;
        if piece.side != self.oracle.turn() {
            debug!("{cell} holds a piece of the side not to move");
            return None;
        }
        Some(DragSession {
            start: cell,
            end: cell,
            piece,
            ghost: geometry.ghost_position(point),
        })
    }

    fn track(&self, session: &mut DragSession, point: Point, board_length: f32) {
        let geometry = BoardGeometry::new(board_length, self.orientation);
        session.end = geometry.resolve_unchecked(point);
        session.ghost = geometry.ghost_position(point);
    }

    fn drop_piece(&mut self, session: DragSession) -> (BoardState, Vec<BoardOutput>) {
        let DragSession {
            start, end, piece, ..
        } = session;
        if !end.is_on_board() {
            debug!("drop off the board cancelled");
            return (BoardState::Idle, Vec::new());
        }

        let legal = self.oracle.legal_moves();
        if is_promotion_drop(piece, end) {
            // a queen stands in for the choice so illegal targets never open the chooser
            let stand_in = PromotionConstraint::Promote(PromotionPiece::Queen);
            if find_move(&legal, start, end, stand_in).is_none() {
                debug!("no promotion from {start} to {end}");
                return (BoardState::Idle, Vec::new());
            }
            let pending = PendingPromotion {
                from: start,
                to: end,
                side: piece.side,
            };
            return (
                BoardState::PendingPromotion(pending),
                vec![BoardOutput::PromotionRequested(piece.side)],
            );
        }

        match find_move(&legal, start, end, PromotionConstraint::NoPromotion) {
            Some(mv) => self.commit(mv),
            None => {
                debug!("no legal move from {start} to {end}");
                (BoardState::Idle, Vec::new())
            }
        }
    }

    fn promote(
        &mut self,
        pending: PendingPromotion,
        piece: PromotionPiece,
    ) -> (BoardState, Vec<BoardOutput>) {
        let legal = self.oracle.legal_moves();
        match find_move(
            &legal,
            pending.from,
            pending.to,
            PromotionConstraint::Promote(piece),
        ) {
            Some(mv) => self.commit(mv),
            None => {
                debug!("{piece:?} promotion on {} is not legal", pending.to);
                (BoardState::Idle, Vec::new())
            }
        }
    }

    fn commit(&mut self, mv: MoveCandidate) -> (BoardState, Vec<BoardOutput>) {
        let mover = self.oracle.turn();
        let san = match self.oracle.apply_move(&mv) {
            Ok(san) => san,
            Err(e) => {
                warn!("oracle rejected a listed move: {e}");
                return (BoardState::Idle, Vec::new());
            }
        };

        let record = MoveRecord {
            notation: san_to_fan(&san, mover),
            fen: self.oracle.position_notation(),
            from: mv.from,
            to: mv.to,
            mover_was_black: mover == Side::Black,
        };
        self.last_move = Some((mv.from, mv.to));
        info!("{mover:?} played {san}");

        let mut outputs = vec![BoardOutput::MoveCommitted(record)];
        let outcome = self.oracle.outcome();
        if !outcome.is_terminal() {
            return (BoardState::Idle, outputs);
        }

        info!("game over: {outcome:?}");
        outputs.push(BoardOutput::SelectLatestHistory);
        outputs.push(BoardOutput::GameEnded(outcome));
        (BoardState::GameOver(GameEnd::Finished(outcome)), outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::oracle::mock::MockOracle;
    use crate::models::oracle::{STANDARD_FEN, ShakmatyOracle};

    const LENGTH: f32 = 900.0;

    fn center(cell: Cell) -> Point {
        BoardGeometry::new(LENGTH, Orientation::BlackAtTop).cell_center(cell)
    }

    fn down(cell: Cell) -> BoardInput {
        BoardInput::PointerDown {
            point: center(cell),
            board_length: LENGTH,
        }
    }

    fn up(cell: Cell) -> BoardInput {
        BoardInput::PointerUp {
            point: center(cell),
            board_length: LENGTH,
        }
    }

    fn drag<O: RulesOracle>(board: &mut Board<O>, from: Cell, to: Cell) -> Vec<BoardOutput> {
        assert!(board.handle(down(from)).is_empty());
        board.handle(up(to))
    }

    fn started<O: RulesOracle>(oracle: O, fen: &str) -> Board<O> {
        let mut board = Board::new(oracle, Orientation::BlackAtTop);
        assert!(board.start_game(fen).unwrap().is_empty());
        board
    }

    fn shakmaty_board(fen: &str) -> Board<ShakmatyOracle> {
        started(ShakmatyOracle::new(), fen)
    }

    const E2: Cell = Cell::new(4, 1);
    const E4: Cell = Cell::new(4, 3);
    const E7: Cell = Cell::new(4, 6);
    const E8: Cell = Cell::new(4, 7);
    // the black rook keeps a knight promotion from being a dead draw
    const PROMOTION_FEN: &str = "r7/4P3/8/8/8/8/8/k6K w - - 0 1";

    fn white_pawn() -> Piece {
        Piece::new(PieceKind::Pawn, Side::White)
    }

    fn plain(from: Cell, to: Cell) -> MoveCandidate {
        MoveCandidate::new(from, to, PromotionConstraint::NoPromotion)
    }

    #[test]
    fn test_new_board_has_no_game() {
        let mut board = Board::new(ShakmatyOracle::new(), Orientation::BlackAtTop);
        assert_eq!(board.state(), &BoardState::GameOver(GameEnd::NotStarted));
        assert!(board.can_navigate());
        assert!(board.handle(down(E2)).is_empty());
        assert_eq!(board.state(), &BoardState::GameOver(GameEnd::NotStarted));
    }

    #[test]
    fn test_start_game_rejects_malformed_fen() {
        let mut board = Board::new(ShakmatyOracle::new(), Orientation::BlackAtTop);
        assert!(board.start_game("8/8/8").is_err());
        assert_eq!(board.state(), &BoardState::GameOver(GameEnd::NotStarted));
    }

    #[test]
    fn test_start_from_stalemate_ends_game() {
        let mut board = Board::new(ShakmatyOracle::new(), Orientation::BlackAtTop);
        let outputs = board.start_game("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(outputs, vec![BoardOutput::GameEnded(GameOutcome::Draw)]);
        assert_eq!(
            board.state(),
            &BoardState::GameOver(GameEnd::Finished(GameOutcome::Draw))
        );
        assert!(!board.is_game_in_progress());
        // the black king cannot be dragged
        assert!(board.handle(down(Cell::new(7, 7))).is_empty());
        assert!(board.claim_draw().is_empty());
    }

    #[test]
    fn test_start_from_checkmate_ends_game() {
        let mut oracle = MockOracle::new(Side::Black);
        oracle.outcome = GameOutcome::WhiteWon;
        let mut board = Board::new(oracle, Orientation::BlackAtTop);
        let outputs = board.start_game("mated").unwrap();
        assert_eq!(outputs, vec![BoardOutput::GameEnded(GameOutcome::WhiteWon)]);
        assert_eq!(
            board.state(),
            &BoardState::GameOver(GameEnd::Finished(GameOutcome::WhiteWon))
        );
    }

    #[test]
    fn test_pointer_down_starts_drag() {
        let mut board = shakmaty_board(STANDARD_FEN);
        board.handle(down(E2));
        match board.state() {
            BoardState::Dragging(session) => {
                assert_eq!(session.start, E2);
                assert_eq!(session.end, E2);
                assert_eq!(session.piece, white_pawn());
                assert_eq!(session.ghost, Point::new(450.0, 650.0));
            }
            other => panic!("expected a drag, got {other:?}"),
        }
    }

    #[test]
    fn test_pointer_down_rejections() {
        let mut board = shakmaty_board(STANDARD_FEN);
        // empty square
        board.handle(down(Cell::new(4, 4)));
        assert_eq!(board.state(), &BoardState::Idle);
        // black piece while white is to move
        board.handle(down(E7));
        assert_eq!(board.state(), &BoardState::Idle);
        // margin
        board.handle(BoardInput::PointerDown {
            point: Point::new(10.0, 10.0),
            board_length: LENGTH,
        });
        assert_eq!(board.state(), &BoardState::Idle);
    }

    #[test]
    fn test_idle_ignores_moves_and_drops() {
        let mut board = shakmaty_board(STANDARD_FEN);
        assert!(board
            .handle(BoardInput::PointerMove {
                point: center(E4),
                board_length: LENGTH
            })
            .is_empty());
        assert!(board.handle(up(E4)).is_empty());
        assert_eq!(board.state(), &BoardState::Idle);
    }

    #[test]
    fn test_pointer_move_tracks_end_cell_off_board() {
        let mut board = shakmaty_board(STANDARD_FEN);
        board.handle(down(E2));
        board.handle(BoardInput::PointerMove {
            point: Point::new(890.0, 10.0),
            board_length: LENGTH,
        });
        let BoardState::Dragging(session) = *board.state() else {
            panic!("drag lost");
        };
        assert!(!session.end.is_on_board());
        assert_eq!(session.end, Cell::new(8, 8));
        assert_eq!(session.ghost, Point::new(840.0, -40.0));

        // a pointer far above the board must not overflow the mirrored rank
        board.handle(BoardInput::PointerMove {
            point: Point::new(400.0, -1e12),
            board_length: LENGTH,
        });
        let BoardState::Dragging(session) = *board.state() else {
            panic!("drag lost");
        };
        assert_eq!(session.end, Cell::new(3, 8));

        // dropping there cancels
        assert!(board
            .handle(BoardInput::PointerUp {
                point: Point::new(890.0, 10.0),
                board_length: LENGTH
            })
            .is_empty());
        assert_eq!(board.state(), &BoardState::Idle);
        assert_eq!(board.oracle().position_notation(), STANDARD_FEN);
    }

    #[test]
    fn test_drop_on_origin_cancels() {
        let mut board = shakmaty_board(STANDARD_FEN);
        assert!(drag(&mut board, E2, E2).is_empty());
        assert_eq!(board.state(), &BoardState::Idle);
        assert_eq!(board.last_move(), None);
        assert_eq!(board.oracle().position_notation(), STANDARD_FEN);
    }

    #[test]
    fn test_illegal_drop_cancels() {
        let mut board = shakmaty_board(STANDARD_FEN);
        assert!(drag(&mut board, E2, Cell::new(4, 4)).is_empty());
        assert_eq!(board.state(), &BoardState::Idle);
        assert_eq!(board.oracle().position_notation(), STANDARD_FEN);
    }

    #[test]
    fn test_commit_e2_e4() {
        let oracle = MockOracle::new(Side::White)
            .with_piece(E2, white_pawn())
            .with_move(plain(E2, E4))
            .with_move(plain(E2, Cell::new(4, 2)));
        let mut board = started(oracle, "start");

        let outputs = drag(&mut board, E2, E4);
        assert_eq!(board.oracle().applied, vec![plain(E2, E4)]);
        assert_eq!(
            outputs,
            vec![BoardOutput::MoveCommitted(MoveRecord {
                notation: "e4".to_string(),
                fen: "after".to_string(),
                from: E2,
                to: E4,
                mover_was_black: false,
            })]
        );
        assert_eq!(board.last_move(), Some((E2, E4)));
        assert_eq!(board.state(), &BoardState::Idle);
    }

    #[test]
    fn test_commit_uses_figurines_and_post_move_fen() {
        let mut board = shakmaty_board(STANDARD_FEN);
        drag(&mut board, E2, E4);
        let outputs = drag(&mut board, Cell::new(6, 7), Cell::new(5, 5));
        let [BoardOutput::MoveCommitted(record)] = outputs.as_slice() else {
            panic!("expected one commit, got {outputs:?}");
        };
        assert_eq!(record.notation, "\u{265E}f6");
        assert!(record.mover_was_black);
        assert_eq!(record.fen, board.oracle().position_notation());
        assert!(record.fen.contains(" w KQkq - 1 2"));
    }

    #[test]
    fn test_promotion_goes_through_chooser() {
        let mut board = shakmaty_board(PROMOTION_FEN);
        let outputs = drag(&mut board, E7, E8);
        assert_eq!(outputs, vec![BoardOutput::PromotionRequested(Side::White)]);
        assert_eq!(
            board.state(),
            &BoardState::PendingPromotion(PendingPromotion {
                from: E7,
                to: E8,
                side: Side::White,
            })
        );
        // nothing played yet
        assert_eq!(board.oracle().position_notation(), PROMOTION_FEN);

        // king and pawn are ignored
        assert!(board.handle(BoardInput::ChoosePromotion(PieceKind::King)).is_empty());
        assert!(board.handle(BoardInput::ChoosePromotion(PieceKind::Pawn)).is_empty());
        assert!(matches!(board.state(), BoardState::PendingPromotion(_)));

        let outputs = board.handle(BoardInput::ChoosePromotion(PieceKind::Knight));
        let [BoardOutput::MoveCommitted(record)] = outputs.as_slice() else {
            panic!("expected one commit, got {outputs:?}");
        };
        assert_eq!(record.notation, "e8=\u{2658}");
        assert_eq!((record.from, record.to), (E7, E8));
        assert_eq!(board.state(), &BoardState::Idle);
    }

    #[test]
    fn test_promotion_dismissal_changes_nothing() {
        let mut board = shakmaty_board(PROMOTION_FEN);
        drag(&mut board, E7, E8);
        assert!(board.handle(BoardInput::DismissPromotion).is_empty());
        assert_eq!(board.state(), &BoardState::Idle);
        assert_eq!(board.oracle().position_notation(), PROMOTION_FEN);
        assert_eq!(board.last_move(), None);
    }

    #[test]
    fn test_illegal_promotion_drop_cancels() {
        let mut board = shakmaty_board(PROMOTION_FEN);
        // diagonal step without a capture
        assert!(drag(&mut board, E7, Cell::new(3, 7)).is_empty());
        assert_eq!(board.state(), &BoardState::Idle);
    }

    #[test]
    fn test_non_pawn_on_last_rank_commits_directly() {
        let a7 = Cell::new(0, 6);
        let a8 = Cell::new(0, 7);
        let oracle = MockOracle::new(Side::White)
            .with_piece(a7, Piece::new(PieceKind::Rook, Side::White))
            .with_move(plain(a7, a8));
        let mut board = started(oracle, "start");
        let outputs = drag(&mut board, a7, a8);
        assert!(matches!(outputs.as_slice(), [BoardOutput::MoveCommitted(_)]));
    }

    #[test]
    fn test_black_pawn_promotes_on_first_rank() {
        let b2 = Cell::new(1, 1);
        let b1 = Cell::new(1, 0);
        let mut oracle = MockOracle::new(Side::Black)
            .with_piece(b2, Piece::new(PieceKind::Pawn, Side::Black));
        for p in PromotionPiece::ALL {
            oracle = oracle.with_move(MoveCandidate::new(b2, b1, PromotionConstraint::Promote(p)));
        }
        let mut board = started(oracle, "start");
        assert_eq!(
            drag(&mut board, b2, b1),
            vec![BoardOutput::PromotionRequested(Side::Black)]
        );
        let outputs = board.handle(BoardInput::ChoosePromotion(PieceKind::Rook));
        assert_eq!(
            board.oracle().applied,
            vec![MoveCandidate::new(
                b2,
                b1,
                PromotionConstraint::Promote(PromotionPiece::Rook)
            )]
        );
        let [BoardOutput::MoveCommitted(record)] = outputs.as_slice() else {
            panic!("expected one commit, got {outputs:?}");
        };
        assert!(record.mover_was_black);
    }

    #[test]
    fn test_checkmate_ends_game() {
        let mut board = shakmaty_board(STANDARD_FEN);
        drag(&mut board, Cell::new(5, 1), Cell::new(5, 2));
        drag(&mut board, Cell::new(4, 6), Cell::new(4, 4));
        drag(&mut board, Cell::new(6, 1), Cell::new(6, 3));
        let outputs = drag(&mut board, Cell::new(3, 7), Cell::new(7, 3));

        assert_eq!(outputs.len(), 3);
        assert!(matches!(&outputs[0], BoardOutput::MoveCommitted(r) if r.notation == "\u{265B}h4#"));
        assert_eq!(outputs[1], BoardOutput::SelectLatestHistory);
        assert_eq!(outputs[2], BoardOutput::GameEnded(GameOutcome::BlackWon));
        assert_eq!(
            board.state(),
            &BoardState::GameOver(GameEnd::Finished(GameOutcome::BlackWon))
        );

        // absorbing
        assert!(drag_ignored(&mut board, Cell::new(4, 1)));
    }

    fn drag_ignored<O: RulesOracle>(board: &mut Board<O>, cell: Cell) -> bool {
        board.handle(down(cell)).is_empty() && matches!(board.state(), BoardState::GameOver(_))
    }

    #[test]
    fn test_claim_draw() {
        let mut oracle = MockOracle::new(Side::White);
        oracle.draws = vec![DrawKind::ThreefoldRepetition];
        let mut board = started(oracle, "start");
        assert_eq!(
            board.claim_draw(),
            vec![
                BoardOutput::SelectLatestHistory,
                BoardOutput::GameEnded(GameOutcome::Draw)
            ]
        );
        assert_eq!(
            board.state(),
            &BoardState::GameOver(GameEnd::Finished(GameOutcome::Draw))
        );
    }

    #[test]
    fn test_claim_draw_refused() {
        let mut board = started(MockOracle::new(Side::White), "start");
        assert!(board.claim_draw().is_empty());
        assert_eq!(board.state(), &BoardState::Idle);
    }

    #[test]
    fn test_claim_draw_prefers_threefold() {
        let mut oracle = MockOracle::new(Side::White);
        oracle.draws = vec![DrawKind::FiftyMoveRule, DrawKind::ThreefoldRepetition];
        let mut board = started(oracle, "start");
        assert_eq!(board.claim_draw().len(), 2);
        assert_eq!(board.oracle().outcome(), GameOutcome::Draw);
    }

    #[test]
    fn test_stop_game() {
        let mut board = started(MockOracle::new(Side::White), "start");
        assert!(board.stop());
        assert_eq!(board.state(), &BoardState::GameOver(GameEnd::Stopped));
        assert!(!board.stop());
    }

    #[test]
    fn test_history_position_only_without_game() {
        let record = MoveRecord {
            notation: "e4".to_string(),
            fen: "historic".to_string(),
            from: E2,
            to: E4,
            mover_was_black: false,
        };
        let mut board = started(MockOracle::new(Side::White), "start");
        assert!(!board.request_history_position(&record));
        assert_eq!(board.oracle().position_notation(), "start");

        board.stop();
        assert!(board.request_history_position(&record));
        assert_eq!(board.oracle().position_notation(), "historic");
        assert_eq!(board.last_move(), Some((E2, E4)));

        // the start position carries no move
        assert!(board.request_history_position(&MoveRecord::start_position("initial")));
        assert_eq!(board.last_move(), None);
    }

    #[test]
    fn test_malformed_history_position_leaves_board() {
        let mut board = started(MockOracle::new(Side::White), "start");
        board.stop();
        let good = MoveRecord {
            notation: "e4".to_string(),
            fen: "good".to_string(),
            from: E2,
            to: E4,
            mover_was_black: false,
        };
        board.request_history_position(&good);

        let bad = MoveRecord {
            fen: "bad".to_string(),
            from: E7,
            to: E8,
            ..good
        };
        assert!(!board.request_history_position(&bad));
        assert_eq!(board.oracle().position_notation(), "good");
        assert_eq!(board.last_move(), Some((E2, E4)));
    }

    #[test]
    fn test_black_at_bottom_drag() {
        let mut board = Board::new(ShakmatyOracle::new(), Orientation::BlackAtBottom);
        board.start_game(STANDARD_FEN).unwrap();
        let geometry = BoardGeometry::new(LENGTH, Orientation::BlackAtBottom);
        board.handle(BoardInput::PointerDown {
            point: geometry.cell_center(E2),
            board_length: LENGTH,
        });
        let outputs = board.handle(BoardInput::PointerUp {
            point: geometry.cell_center(E4),
            board_length: LENGTH,
        });
        assert!(matches!(&outputs[..], [BoardOutput::MoveCommitted(r)] if r.to == E4));
    }
}
