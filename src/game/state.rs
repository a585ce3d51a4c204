use super::{Board, ChessField, Color, Move, Piece, PieceType, ZOBRIST};
use thiserror::Error;

/// Why an attempted move was rejected. Routine interactive input, reported
/// as a value and never as a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece on {0}")]
    NoPieceAtSource(ChessField),
    #[error("it is {0}'s turn to move")]
    WrongTurn(Color),
    #[error("{1} is not reachable from {0}")]
    DestinationNotReachable(ChessField, ChessField),
    #[error("{0} would leave the own king in check")]
    LeavesKingInCheck(Move),
}

/// One running game: the board, whose turn it is and the last committed
/// move. All rule enforcement funnels through `attempt_move`; a rejected
/// move leaves the whole state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) active_color: Color,
    pub(crate) last_move: Option<Move>,
    pub(crate) halfmove_clock: u8,
    pub(crate) fullmove_number: u16,
}

impl Game {
    /// A fresh game in the standard starting position, white to move.
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
            active_color: Color::White,
            last_move: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_color(&self) -> Color {
        self.active_color
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn piece_at(&self, field: ChessField) -> Option<Piece> {
        self.board.piece_at(field)
    }

    pub fn render_to_string(&self) -> String {
        self.board.render_to_string()
    }

    /// Attempts to play `from` -> `to` for the side to move. On success the
    /// move is committed (including the rook relocation of a castle and the
    /// pawn removal of an en passant capture), the mover is marked as moved,
    /// the move is recorded and the turn switches. On failure nothing
    /// changes and the reason is returned.
    pub fn attempt_move(&mut self, from: ChessField, to: ChessField) -> Result<Move, MoveError> {
        let piece = match self.board.piece_at(from) {
            Some(piece) => piece,
            None => return Err(MoveError::NoPieceAtSource(from)),
        };
        if piece.color != self.active_color {
            return Err(MoveError::WrongTurn(self.active_color));
        }

        let mv = self
            .board
            .pseudo_moves_from(from, self.last_move.as_ref())
            .into_iter()
            .find(|mv| mv.to == to)
            .ok_or(MoveError::DestinationNotReachable(from, to))?;

        if !self.move_is_legal(&mv) {
            return Err(MoveError::LeavesKingInCheck(mv));
        }

        self.commit(mv);
        Ok(mv)
    }

    /// Pseudo-legal destinations of the piece on `field`, regardless of
    /// whose turn it is.
    pub fn pseudo_moves_from(&self, field: ChessField) -> Vec<Move> {
        self.board.pseudo_moves_from(field, self.last_move.as_ref())
    }

    /// The pseudo-legal moves of the piece on `field` that survive the
    /// king-safety simulation. This is the set `attempt_move` accepts, and
    /// what a host highlights.
    pub fn legal_moves_from(&self, field: ChessField) -> Vec<Move> {
        self.pseudo_moves_from(field)
            .into_iter()
            .filter(|mv| self.move_is_legal(mv))
            .collect()
    }

    /// Every legal move of the side to move.
    pub fn all_legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for row in 0..8 {
            for col in 0..8 {
                let field = ChessField::new(row, col);
                if let Some(piece) = self.board.piece_at(field) {
                    if piece.color == self.active_color {
                        moves.extend(self.legal_moves_from(field));
                    }
                }
            }
        }
        moves
    }

    /// Simulates `mv` on a scratch copy of the board and reports whether the
    /// mover's king is safe afterwards. The copy shares nothing with the
    /// live board. A missing king on the scratch board means the data model
    /// was broken outside of normal play, and fails loudly.
    pub fn move_is_legal(&self, mv: &Move) -> bool {
        let mut scratch = self.board.clone();
        scratch.apply_move(*mv);

        let king = scratch
            .find_king(mv.piece.color)
            .unwrap_or_else(|| panic!("no {} king on the board after {}", mv.piece.color, mv));
        !scratch.is_square_attacked_by_color(king, mv.piece.color.opposite())
    }

    /// Whether `color`'s king currently stands attacked.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.board.find_king(color) {
            Some(king) => self.board.is_square_attacked_by_color(king, color.opposite()),
            None => false,
        }
    }

    /// Commits an already validated move.
    pub(crate) fn commit(&mut self, mv: Move) {
        let captured = self.board.apply_move(mv);

        if mv.piece.kind == PieceType::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        self.last_move = Some(mv);
        self.active_color = self.active_color.opposite();
        if self.active_color == Color::White {
            self.fullmove_number += 1;
        }
    }

    /// Static castling eligibility per side, `[white kingside, white
    /// queenside, black kingside, black queenside]`: unmoved king on its
    /// home square with the unmoved rook in the matching corner. Says
    /// nothing about checks or occupied squares in between.
    pub fn castling_rights(&self) -> [bool; 4] {
        [
            self.castle_pieces_unmoved(Color::White, 7),
            self.castle_pieces_unmoved(Color::White, 0),
            self.castle_pieces_unmoved(Color::Black, 7),
            self.castle_pieces_unmoved(Color::Black, 0),
        ]
    }

    fn castle_pieces_unmoved(&self, color: Color, corner_col: u8) -> bool {
        let home_row = match color {
            Color::White => 0,
            Color::Black => 7,
        };
        let king_ok = matches!(
            self.board.piece_at(ChessField::new(home_row, 4)),
            Some(king) if king.kind == PieceType::King && king.color == color && !king.has_moved
        );
        let rook_ok = matches!(
            self.board.piece_at(ChessField::new(home_row, corner_col)),
            Some(rook) if rook.kind == PieceType::Rook && rook.color == color && !rook.has_moved
        );
        king_ok && rook_ok
    }

    /// The square an enemy pawn could capture onto en passant right now,
    /// derived from the last committed move.
    pub fn en_passant_field(&self) -> Option<ChessField> {
        let last = self.last_move?;
        if last.piece.kind == PieceType::Pawn && last.from.row.abs_diff(last.to.row) == 2 {
            Some(ChessField::new((last.from.row + last.to.row) / 2, last.from.col))
        } else {
            None
        }
    }

    /// Zobrist hash of the full game state, suitable as a cache key for
    /// hosts that memoize per position.
    pub fn position_hash(&self) -> u64 {
        ZOBRIST.calculate_hash(self)
    }
}
