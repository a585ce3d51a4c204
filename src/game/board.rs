use super::{CastleSide, ChessField, Color, Move, Piece, PieceType, Square};

/// The 8x8 grid. Exclusive owner of all live pieces: a piece exists exactly
/// in the square that holds it, so position bookkeeping cannot drift, and a
/// captured piece is simply overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [[Square; 8]; 8],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; 8]; 8],
        }
    }

    /// The standard chess starting layout, all pieces unmoved.
    pub fn starting_position() -> Self {
        use PieceType::{Bishop, King, Knight, Pawn, Queen, Rook};

        let mut board = Self::new();
        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        for (col, &kind) in back_rank.iter().enumerate() {
            board.squares[0][col] = Square::Occupied(Piece::new(Color::White, kind));
            board.squares[7][col] = Square::Occupied(Piece::new(Color::Black, kind));
        }
        for col in 0..8 {
            board.squares[1][col] = Square::Occupied(Piece::new(Color::White, Pawn));
            board.squares[6][col] = Square::Occupied(Piece::new(Color::Black, Pawn));
        }
        board
    }

    pub fn square(&self, field: ChessField) -> Square {
        self.squares[field.row as usize][field.col as usize]
    }

    pub fn piece_at(&self, field: ChessField) -> Option<Piece> {
        match self.square(field) {
            Square::Occupied(piece) => Some(piece),
            Square::Empty => None,
        }
    }

    pub(crate) fn place(&mut self, field: ChessField, piece: Piece) {
        self.squares[field.row as usize][field.col as usize] = Square::Occupied(piece);
    }

    pub(crate) fn clear(&mut self, field: ChessField) -> Option<Piece> {
        match std::mem::replace(
            &mut self.squares[field.row as usize][field.col as usize],
            Square::Empty,
        ) {
            Square::Occupied(piece) => Some(piece),
            Square::Empty => None,
        }
    }

    /// Relocates the occupant of `from` to `to` in one step, marking it as
    /// moved. Returns whatever was captured on `to`.
    pub(crate) fn move_piece(&mut self, from: ChessField, to: ChessField) -> Option<Piece> {
        let mut piece = match self.clear(from) {
            Some(piece) => piece,
            None => return None,
        };
        piece.has_moved = true;
        let captured = self.piece_at(to);
        self.place(to, piece);
        captured
    }

    /// Applies a generated move to this board: the relocation itself, the
    /// bypassed pawn removal for en passant, and the rook relocation for
    /// castling. Returns the captured piece, if any. Works identically on
    /// the live board and on scratch copies.
    pub(crate) fn apply_move(&mut self, mv: Move) -> Option<Piece> {
        let captured = self.move_piece(mv.from, mv.to);

        // The en passant victim sits beside the capturing pawn, not on the
        // destination square.
        let captured = if mv.is_en_passant {
            self.clear(ChessField::new(mv.from.row, mv.to.col))
        } else {
            captured
        };

        if let Some(side) = mv.castle {
            let (rook_from, rook_to) = match side {
                CastleSide::Kingside => (7, 5),
                CastleSide::Queenside => (0, 3),
            };
            self.move_piece(
                ChessField::new(mv.from.row, rook_from),
                ChessField::new(mv.from.row, rook_to),
            );
        }

        captured
    }

    pub fn find_king(&self, color: Color) -> Option<ChessField> {
        for row in 0..8 {
            for col in 0..8 {
                if let Square::Occupied(piece) = self.squares[row][col] {
                    if piece.kind == PieceType::King && piece.color == color {
                        return Some(ChessField::new(row as u8, col as u8));
                    }
                }
            }
        }
        None
    }

    pub fn render_to_string(&self) -> String {
        let mut board_representation = String::new();
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");
        board_representation.push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for row in (0..8).rev() {
            // Render rows from top (8) to bottom (1)
            board_representation.push_str(&format!("{} │", row + 1));
            for col in 0..8 {
                let square = match &self.squares[row][col] {
                    Square::Empty => ' ',
                    Square::Occupied(piece) => piece.to_char(),
                };
                board_representation.push_str(&format!(" {} │", square));
            }
            board_representation.push_str(&format!(" {}\n", row + 1));

            if row > 0 {
                board_representation.push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            }
        }

        board_representation.push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");

        board_representation
    }
}
