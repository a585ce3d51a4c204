use super::{Board, ChessField, Color, PieceType, Square};

impl Board {
    /// Reports whether `field` is attacked by any piece of `by` on this
    /// board snapshot. Sliding attacks are found by walking rays outward
    /// from the field until the first occupied square, so a blocked path can
    /// never count; pawns, knights and the king are probed at their fixed
    /// offsets. Move history is never consulted (a pawn attacks its forward
    /// diagonals whether or not en passant is available), which keeps the
    /// castling safety check free of any recursion into move generation.
    pub fn is_square_attacked_by_color(&self, field: ChessField, by: Color) -> bool {
        const DIRECTIONS: [(isize, isize); 8] = [
            (-1, 0),
            (1, 0),
            (0, -1),
            (0, 1), // Rook-like directions (orthogonal)
            (-1, -1),
            (-1, 1),
            (1, -1),
            (1, 1), // Bishop-like directions (diagonals)
        ];

        for &(delta_row, delta_col) in &DIRECTIONS {
            let diagonal = delta_row != 0 && delta_col != 0;

            let mut current = field;
            while let Some(next) = current.offset(delta_row, delta_col) {
                match self.square(next) {
                    Square::Empty => current = next,
                    Square::Occupied(piece) => {
                        if piece.color == by {
                            match piece.kind {
                                PieceType::Rook if !diagonal => return true,
                                PieceType::Bishop if diagonal => return true,
                                PieceType::Queen => return true,
                                _ => {}
                            }
                        }
                        break;
                    }
                }
            }
        }

        // A pawn of `by` attacks this field from one rank toward its own
        // side.
        let pawn_offsets: [(isize, isize); 2] = match by {
            Color::White => [(-1, -1), (-1, 1)],
            Color::Black => [(1, -1), (1, 1)],
        };
        if self.occupied_by(field, by, &pawn_offsets, PieceType::Pawn) {
            return true;
        }

        const KNIGHT_OFFSETS: [(isize, isize); 8] =
            [(-2, -1), (-1, -2), (1, -2), (2, -1), (2, 1), (1, 2), (-1, 2), (-2, 1)];
        if self.occupied_by(field, by, &KNIGHT_OFFSETS, PieceType::Knight) {
            return true;
        }

        const KING_OFFSETS: [(isize, isize); 8] =
            [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];
        self.occupied_by(field, by, &KING_OFFSETS, PieceType::King)
    }

    fn occupied_by(
        &self,
        field: ChessField,
        by: Color,
        offsets: &[(isize, isize)],
        kind: PieceType,
    ) -> bool {
        for &(delta_row, delta_col) in offsets {
            if let Some(probe) = field.offset(delta_row, delta_col) {
                if let Square::Occupied(piece) = self.square(probe) {
                    if piece.color == by && piece.kind == kind {
                        return true;
                    }
                }
            }
        }
        false
    }
}
