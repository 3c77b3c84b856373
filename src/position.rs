//! Rules-engine boundary.
//!
//! The searcher and the evaluator only talk to a board through the
//! [`Position`] trait. [`GameBoard`] implements it on top of the `chess`
//! crate and adds the game-line history needed for repetition checks and
//! strict push/pop undo.

use std::fmt;
use std::str::FromStr;

use chess::{Board, BoardStatus, ChessMove, Color, MoveGen, Piece};

use crate::error::{Error, Result};
use crate::types::{PieceKind, SquareSet};

/// Contract the decision core needs from a rules engine.
///
/// Implementations are assumed correct: generated moves are legal and
/// `undo_move` restores exactly the state before the matching `make_move`.
pub trait Position {
    type Move: Copy + Eq + fmt::Debug + fmt::Display;

    /// Hash of the full position (placement, side to move, castling, en passant).
    fn key(&self) -> u64;

    /// True if the current position already occurred earlier in the game line.
    fn is_repetition(&self) -> bool;

    fn white_to_move(&self) -> bool;

    /// True if the side to move is in check.
    fn in_check(&self) -> bool;

    /// Squares occupied by pieces of `kind` belonging to white or black.
    fn pieces(&self, kind: PieceKind, white: bool) -> SquareSet;

    /// Legal moves in generation order, optionally restricted to captures.
    fn legal_moves(&self, captures_only: bool) -> Vec<Self::Move>;

    /// Type of the piece that makes `mv`.
    fn moving_piece(&self, mv: Self::Move) -> PieceKind;

    /// Type of the piece `mv` captures, if any.
    fn captured_piece(&self, mv: Self::Move) -> Option<PieceKind>;

    fn make_move(&mut self, mv: Self::Move);

    /// Revert the most recent `make_move`.
    fn undo_move(&mut self);
}

/// A `chess::Board` plus the line of positions that led to it.
#[derive(Clone)]
pub struct GameBoard {
    board: Board,
    undo: Vec<Board>,
    /// Keys of every position in the game line, current one last.
    keys: Vec<u64>,
}

impl GameBoard {
    #[must_use]
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        let board = Board::from_str(fen).map_err(|_| Error::InvalidFen {
            fen: fen.to_string(),
        })?;
        Ok(Self::from_board(board))
    }

    fn from_board(board: Board) -> Self {
        GameBoard {
            board,
            undo: Vec::new(),
            keys: vec![board.get_hash()],
        }
    }

    #[must_use]
    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    #[must_use]
    pub fn status(&self) -> BoardStatus {
        self.board.status()
    }

    /// Number of moves made since construction.
    #[must_use]
    pub fn line_len(&self) -> usize {
        self.undo.len()
    }

    /// Look up a move in long algebraic notation (`e2e4`, `e7e8q`).
    pub fn parse_move(&self, notation: &str) -> Result<ChessMove> {
        MoveGen::new_legal(&self.board)
            .find(|mv| mv.to_string() == notation)
            .ok_or_else(|| Error::IllegalMove {
                notation: notation.to_string(),
            })
    }

    /// Play a sequence of moves in long algebraic notation.
    pub fn play_line(&mut self, moves: &[&str]) -> Result<()> {
        for notation in moves {
            let mv = self.parse_move(notation)?;
            self.make_move(mv);
        }
        Ok(())
    }

    fn is_en_passant(&self, mv: ChessMove) -> bool {
        self.board.piece_on(mv.get_source()) == Some(Piece::Pawn)
            && mv.get_source().get_file() != mv.get_dest().get_file()
            && self.board.piece_on(mv.get_dest()).is_none()
    }
}

impl Default for GameBoard {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Debug for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameBoard")
            .field("fen", &self.fen())
            .field("line_len", &self.undo.len())
            .finish()
    }
}

fn kind_of(piece: Piece) -> PieceKind {
    match piece {
        Piece::Pawn => PieceKind::Pawn,
        Piece::Knight => PieceKind::Knight,
        Piece::Bishop => PieceKind::Bishop,
        Piece::Rook => PieceKind::Rook,
        Piece::Queen => PieceKind::Queen,
        Piece::King => PieceKind::King,
    }
}

fn piece_of(kind: PieceKind) -> Piece {
    match kind {
        PieceKind::Pawn => Piece::Pawn,
        PieceKind::Knight => Piece::Knight,
        PieceKind::Bishop => Piece::Bishop,
        PieceKind::Rook => Piece::Rook,
        PieceKind::Queen => Piece::Queen,
        PieceKind::King => Piece::King,
    }
}

impl Position for GameBoard {
    type Move = ChessMove;

    #[inline]
    fn key(&self) -> u64 {
        self.board.get_hash()
    }

    fn is_repetition(&self) -> bool {
        let Some((current, earlier)) = self.keys.split_last() else {
            return false;
        };
        earlier.iter().rev().any(|key| key == current)
    }

    #[inline]
    fn white_to_move(&self) -> bool {
        self.board.side_to_move() == Color::White
    }

    #[inline]
    fn in_check(&self) -> bool {
        self.board.checkers().popcnt() > 0
    }

    fn pieces(&self, kind: PieceKind, white: bool) -> SquareSet {
        let color = if white { Color::White } else { Color::Black };
        let bb = *self.board.pieces(piece_of(kind)) & *self.board.color_combined(color);
        SquareSet(bb.0)
    }

    fn legal_moves(&self, captures_only: bool) -> Vec<ChessMove> {
        MoveGen::new_legal(&self.board)
            .filter(|mv| !captures_only || self.captured_piece(*mv).is_some())
            .collect()
    }

    fn moving_piece(&self, mv: ChessMove) -> PieceKind {
        self.board
            .piece_on(mv.get_source())
            .map_or(PieceKind::Pawn, kind_of)
    }

    fn captured_piece(&self, mv: ChessMove) -> Option<PieceKind> {
        match self.board.piece_on(mv.get_dest()) {
            Some(piece) => Some(kind_of(piece)),
            None if self.is_en_passant(mv) => Some(PieceKind::Pawn),
            None => None,
        }
    }

    fn make_move(&mut self, mv: ChessMove) {
        let next = self.board.make_move_new(mv);
        self.undo.push(self.board);
        self.board = next;
        self.keys.push(next.get_hash());
    }

    fn undo_move(&mut self) {
        debug_assert!(!self.undo.is_empty(), "undo_move without a matching make_move");
        if let Some(previous) = self.undo.pop() {
            self.board = previous;
            self.keys.pop();
        }
    }
}
