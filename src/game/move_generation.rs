use super::{Board, CastleSide, ChessField, Color, Move, Piece, PieceType, Square};

impl Board {
    /// Generates the pseudo-legal moves of the piece on `field`: movement
    /// pattern and occupancy rules only, with no regard for whose turn it is
    /// or whether the mover's king ends up in check. Pure function of the
    /// board snapshot and the last committed move (en passant eligibility),
    /// so it is equally valid on scratch copies.
    pub fn pseudo_moves_from(&self, field: ChessField, last_move: Option<&Move>) -> Vec<Move> {
        if let Square::Occupied(piece) = self.square(field) {
            match piece.kind {
                PieceType::Pawn => self.pawn_moves(field, piece, last_move),
                PieceType::Knight => self.knight_moves(field, piece),
                PieceType::Bishop => self.bishop_moves(field, piece),
                PieceType::Rook => self.rook_moves(field, piece),
                PieceType::Queen => self.queen_moves(field, piece),
                PieceType::King => self.king_moves(field, piece),
            }
        } else {
            Vec::new()
        }
    }

    fn pawn_moves(&self, field: ChessField, piece: Piece, last_move: Option<&Move>) -> Vec<Move> {
        let mut moves = Vec::new();
        let forward: isize = match piece.color {
            Color::White => 1,
            Color::Black => -1,
        };

        // Forward pushes. A pawn stranded on the back rank generates none
        // (the engine does not promote), and the offset guard keeps the
        // lookup on the board.
        if let Some(one_ahead) = field.offset(forward, 0) {
            if self.square(one_ahead) == Square::Empty {
                moves.push(Move::new(piece, field, one_ahead));

                // The double push is keyed off the move-history flag, not the
                // rank the pawn happens to stand on.
                if !piece.has_moved {
                    if let Some(two_ahead) = field.offset(2 * forward, 0) {
                        if self.square(two_ahead) == Square::Empty {
                            moves.push(Move::new(piece, field, two_ahead));
                        }
                    }
                }
            }
        }

        // Capture diagonally
        for delta_col in [-1, 1] {
            if let Some(target) = field.offset(forward, delta_col) {
                if let Square::Occupied(occupant) = self.square(target) {
                    if occupant.color != piece.color {
                        moves.push(Move::new(piece, field, target));
                    }
                }
            }
        }

        // En passant: the last committed move was an enemy pawn double push
        // landing right beside this pawn; the capture lands on the square it
        // passed over.
        if let Some(last) = last_move {
            if last.piece.kind == PieceType::Pawn
                && last.piece.color != piece.color
                && last.from.row.abs_diff(last.to.row) == 2
                && last.to.row == field.row
                && last.to.col.abs_diff(field.col) == 1
            {
                let sideways = last.to.col as isize - field.col as isize;
                if let Some(target) = field.offset(forward, sideways) {
                    moves.push(Move::new(piece, field, target).with_en_passant());
                }
            }
        }

        moves
    }

    fn knight_moves(&self, field: ChessField, piece: Piece) -> Vec<Move> {
        const KNIGHT_MOVES: [(isize, isize); 8] =
            [(-2, -1), (-1, -2), (1, -2), (2, -1), (2, 1), (1, 2), (-1, 2), (-2, 1)];

        self.moves_from_offsets(field, piece, &KNIGHT_MOVES)
    }

    /// Shared ray walk of the sliding pieces (bishop, rook, queen): extend
    /// every direction until the board edge, an own piece (stop, exclude) or
    /// an enemy piece (stop, include as capture).
    fn sliding_moves(
        &self,
        field: ChessField,
        piece: Piece,
        directions: &[(isize, isize)],
    ) -> Vec<Move> {
        let mut moves = Vec::new();

        for &(delta_row, delta_col) in directions {
            let mut current = field;
            while let Some(next) = current.offset(delta_row, delta_col) {
                match self.square(next) {
                    Square::Empty => {
                        moves.push(Move::new(piece, field, next));
                        current = next;
                    }
                    Square::Occupied(occupant) => {
                        if occupant.color != piece.color {
                            moves.push(Move::new(piece, field, next));
                        }
                        break; // Block sliding
                    }
                }
            }
        }

        moves
    }

    fn bishop_moves(&self, field: ChessField, piece: Piece) -> Vec<Move> {
        const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
        self.sliding_moves(field, piece, &BISHOP_DIRECTIONS)
    }

    fn rook_moves(&self, field: ChessField, piece: Piece) -> Vec<Move> {
        const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
        self.sliding_moves(field, piece, &ROOK_DIRECTIONS)
    }

    fn queen_moves(&self, field: ChessField, piece: Piece) -> Vec<Move> {
        const QUEEN_DIRECTIONS: [(isize, isize); 8] =
            [(-1, -1), (-1, 1), (1, -1), (1, 1), (0, -1), (0, 1), (-1, 0), (1, 0)];
        self.sliding_moves(field, piece, &QUEEN_DIRECTIONS)
    }

    /// King steps plus castling candidates.
    fn king_moves(&self, field: ChessField, piece: Piece) -> Vec<Move> {
        const KING_MOVES: [(isize, isize); 8] =
            [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

        let mut moves = self.moves_from_offsets(field, piece, &KING_MOVES);

        let home_row = match piece.color {
            Color::White => 0,
            Color::Black => 7,
        };

        // Castling: unmoved king on its home square, unmoved rook in the
        // corner, empty squares between them, king not currently in check and
        // not crossing an attacked square. The attack scan never consults
        // castling state, so this cannot recurse.
        if field == ChessField::new(home_row, 4)
            && !piece.has_moved
            && !self.is_square_attacked_by_color(field, piece.color.opposite())
        {
            if self.can_castle(piece, home_row, CastleSide::Kingside) {
                moves.push(
                    Move::new(piece, field, ChessField::new(home_row, 6))
                        .with_castle(CastleSide::Kingside),
                );
            }
            if self.can_castle(piece, home_row, CastleSide::Queenside) {
                moves.push(
                    Move::new(piece, field, ChessField::new(home_row, 2))
                        .with_castle(CastleSide::Queenside),
                );
            }
        }

        moves
    }

    fn can_castle(&self, king: Piece, home_row: u8, side: CastleSide) -> bool {
        let (corner_col, between_cols, transit_cols): (u8, &[u8], [u8; 2]) = match side {
            CastleSide::Kingside => (7, &[5, 6], [5, 6]),
            CastleSide::Queenside => (0, &[1, 2, 3], [3, 2]),
        };

        let rook_ok = matches!(
            self.square(ChessField::new(home_row, corner_col)),
            Square::Occupied(rook)
                if rook.kind == PieceType::Rook && rook.color == king.color && !rook.has_moved
        );
        if !rook_ok {
            return false;
        }

        if between_cols
            .iter()
            .any(|&col| self.square(ChessField::new(home_row, col)) != Square::Empty)
        {
            return false;
        }

        transit_cols.iter().all(|&col| {
            !self.is_square_attacked_by_color(ChessField::new(home_row, col), king.color.opposite())
        })
    }

    fn moves_from_offsets(
        &self,
        field: ChessField,
        piece: Piece,
        offsets: &[(isize, isize)],
    ) -> Vec<Move> {
        let mut moves = Vec::new();

        for &(delta_row, delta_col) in offsets {
            if let Some(target) = field.offset(delta_row, delta_col) {
                match self.square(target) {
                    Square::Empty => moves.push(Move::new(piece, field, target)),
                    Square::Occupied(occupant) => {
                        if occupant.color != piece.color {
                            moves.push(Move::new(piece, field, target));
                        }
                    }
                }
            }
        }

        moves
    }
}

#[cfg(test)]
mod tests {
    use super::super::fen::from_fen;
    use super::super::test_utils::{assert_moves, play};
    use super::*;

    #[test]
    fn test_pawn_moves_pseudo_legal() {
        // A pawn off its start rank only has the single push. e4 to e5
        let game = from_fen("8/8/8/8/4P3/8/8/8 w - - 0 1").unwrap();
        assert_moves(game.pseudo_moves_from_algebraic("e4").into_iter(), vec!["e4e5"]);

        // Pawn a3 blocked by a4
        let game = from_fen("8/8/8/8/P7/P7/8/8 w - - 0 1").unwrap();
        assert_moves(game.pseudo_moves_from_algebraic("a3").into_iter(), vec![]);

        // White pawn at e5 can capture at d6, push to e6 and take f5 en passant
        let game = from_fen("8/8/3p4/4Pp2/8/8/8/8 w - f6 0 1").unwrap();
        let expected_moves = vec!["e5d6", "e5e6", "e5f6"];
        assert_moves(game.pseudo_moves_from_algebraic("e5").into_iter(), expected_moves);

        // Unmoved pawn on b2 with black pieces on a3 and c3
        let game = from_fen("8/8/8/8/8/p1p5/1P6/8 w - - 0 1").unwrap();
        let expected_moves = vec!["b2b3", "b2b4", "b2a3", "b2c3"];
        assert_moves(game.pseudo_moves_from_algebraic("b2").into_iter(), expected_moves);

        // Black pawn off its start rank moves a6 to a5
        let game = from_fen("8/8/p7/8/8/8/8/8 b - - 0 1").unwrap();
        assert_moves(game.pseudo_moves_from_algebraic("a6").into_iter(), vec!["a6a5"]);

        // Black pawn a6 blocked by a5
        let game = from_fen("8/8/p7/p7/8/8/8/8 b - - 0 1").unwrap();
        assert_moves(game.pseudo_moves_from_algebraic("a6").into_iter(), vec![]);

        // Single and double step of unmoved black pawn a7
        let game = from_fen("8/p7/8/8/8/8/8/8 b - - 0 1").unwrap();
        assert_moves(game.pseudo_moves_from_algebraic("a7").into_iter(), vec!["a7a6", "a7a5"]);

        // Double step blocked on a5, single step still available
        let game = from_fen("8/p7/8/p7/8/8/8/8 b - - 0 1").unwrap();
        assert_moves(game.pseudo_moves_from_algebraic("a7").into_iter(), vec!["a7a6"]);

        // No capture of the own pawn on b6
        let game = from_fen("8/p7/1p6/8/8/8/8/8 b - - 0 1").unwrap();
        assert_moves(game.pseudo_moves_from_algebraic("a7").into_iter(), vec!["a7a6", "a7a5"]);

        // Capture of the white pawn on b6
        let game = from_fen("8/p7/1P6/8/8/8/8/8 b - - 0 1").unwrap();
        assert_moves(
            game.pseudo_moves_from_algebraic("a7").into_iter(),
            vec!["a7a6", "a7a5", "a7b6"],
        );

        // Captures on both diagonals
        let game = from_fen("8/1p6/P1P5/8/8/8/8/8 b - - 0 1").unwrap();
        assert_moves(
            game.pseudo_moves_from_algebraic("b7").into_iter(),
            vec!["b7b6", "b7b5", "b7a6", "b7c6"],
        );

        // No promotion: the push onto the last rank is a plain move
        let game = from_fen("8/6P1/8/8/8/8/8/8 w - - 0 1").unwrap();
        assert_moves(game.pseudo_moves_from_algebraic("g7").into_iter(), vec!["g7g8"]);

        let game = from_fen("3r4/2P5/8/8/8/8/8/8 w - - 0 1").unwrap();
        assert_moves(
            game.pseudo_moves_from_algebraic("c7").into_iter(),
            vec!["c7c8", "c7d8"],
        );

        // A pawn stranded on the back rank has nowhere to go
        let game = from_fen("6P1/8/8/8/8/8/8/8 w - - 0 1").unwrap();
        assert_moves(game.pseudo_moves_from_algebraic("g8").into_iter(), vec![]);
    }

    #[test]
    fn test_pawn_double_push_keyed_off_move_flag() {
        // A pawn that already moved gets no double push even from its start
        // rank.
        let mut board = Board::new();
        let mut pawn = Piece::new(Color::White, PieceType::Pawn);
        pawn.has_moved = true;
        board.place(ChessField::from_algebraic("e2"), pawn);

        assert_moves(
            board
                .pseudo_moves_from(ChessField::from_algebraic("e2"), None)
                .into_iter(),
            vec!["e2e3"],
        );
    }

    #[test]
    fn test_knight_moves_pseudo_legal() {
        // White knight at d4 can move to 8 possible squares
        let game = from_fen("8/8/8/8/3N4/8/8/8 w - - 0 1").unwrap();
        let expected_moves = vec!["d4b3", "d4c2", "d4e2", "d4f3", "d4f5", "d4e6", "d4c6", "d4b5"];
        assert_moves(game.pseudo_moves_from_algebraic("d4").into_iter(), expected_moves);

        // Black knight at d4 can move to 8 possible squares incl. one capture
        let game = from_fen("8/8/8/5N2/3n4/8/8/8 b - - 0 1").unwrap();
        let expected_moves = vec!["d4b3", "d4c2", "d4e2", "d4f3", "d4f5", "d4e6", "d4c6", "d4b5"];
        assert_moves(game.pseudo_moves_from_algebraic("d4").into_iter(), expected_moves);

        // White knight at a3 with blocked fields
        let game = from_fen("8/8/8/1rn5/2r5/N7/2B5/1Q6 w - - 0 1").unwrap();
        assert_moves(game.pseudo_moves_from_algebraic("a3").into_iter(), vec!["a3c4", "a3b5"]);

        // Black knight at a3 with blocked fields
        let game = from_fen("8/8/8/1RN5/2R5/n7/2b5/1q6 b - - 0 1").unwrap();
        assert_moves(game.pseudo_moves_from_algebraic("a3").into_iter(), vec!["a3c4", "a3b5"]);
    }

    #[test]
    fn test_bishop_moves_pseudo_legal() {
        // Bishop moves on both diagonals
        let game = from_fen("8/8/8/8/3B4/8/8/8 w - - 0 1").unwrap();
        let expected_moves = vec![
            "d4a7", "d4b6", "d4c5", "d4e3", "d4f2", "d4g1", //first diagonal
            "d4a1", "d4b2", "d4c3", "d4e5", "d4f6", "d4g7", "d4h8",
        ];
        assert_moves(game.pseudo_moves_from_algebraic("d4").into_iter(), expected_moves);

        // Bishop with a capture and a blocked square
        let game = from_fen("8/6r1/5B2/8/3P4/8/8/8 w - - 0 1").unwrap();
        let expected_moves = vec!["f6d8", "f6e7", "f6g5", "f6h4", "f6e5", "f6g7"];
        assert_moves(game.pseudo_moves_from_algebraic("f6").into_iter(), expected_moves);

        // Black bishop moves on both diagonals
        let game = from_fen("8/8/8/8/8/3b4/8/8 b - - 0 1").unwrap();
        let expected_moves = vec![
            "d3a6", "d3b5", "d3c4", "d3e2", "d3f1", //first diagonal
            "d3b1", "d3c2", "d3e4", "d3f5", "d3g6", "d3h7",
        ];
        assert_moves(game.pseudo_moves_from_algebraic("d3").into_iter(), expected_moves);

        // Black bishop with a capture and a blocked square
        let game = from_fen("8/6R1/5b2/8/3p4/8/8/8 b - - 0 1").unwrap();
        let expected_moves = vec!["f6d8", "f6e7", "f6g5", "f6h4", "f6e5", "f6g7"];
        assert_moves(game.pseudo_moves_from_algebraic("f6").into_iter(), expected_moves);
    }

    #[test]
    fn test_rook_moves_pseudo_legal() {
        let game = from_fen("8/8/8/8/3R4/8/8/8 w - - 0 1").unwrap();
        let expected_moves = vec![
            "d4d1", "d4d2", "d4d3", "d4d5", "d4d6", "d4d7", "d4d8", "d4a4", "d4b4", "d4c4", "d4e4",
            "d4f4", "d4g4", "d4h4",
        ];
        assert_moves(game.pseudo_moves_from_algebraic("d4").into_iter(), expected_moves);

        // White rook with a capture and a blocked square
        let game = from_fen("8/8/8/8/3bR3/8/4N3/8 w - - 0 1").unwrap();
        let expected_moves = vec!["e4e3", "e4e5", "e4e6", "e4e7", "e4e8", "e4d4", "e4f4", "e4g4", "e4h4"];
        assert_moves(game.pseudo_moves_from_algebraic("e4").into_iter(), expected_moves);

        let game = from_fen("8/8/8/8/8/3r4/8/8 b - - 0 1").unwrap();
        let expected_moves = vec![
            "d3d1", "d3d2", "d3d4", "d3d5", "d3d6", "d3d7", "d3d8", "d3a3", "d3b3", "d3c3", "d3e3",
            "d3f3", "d3g3", "d3h3",
        ];
        assert_moves(game.pseudo_moves_from_algebraic("d3").into_iter(), expected_moves);

        // Black rook with a capture and a blocked square
        let game = from_fen("8/8/8/8/3Br3/8/4n3/8 b - - 0 1").unwrap();
        let expected_moves = vec!["e4e3", "e4e5", "e4e6", "e4e7", "e4e8", "e4d4", "e4f4", "e4g4", "e4h4"];
        assert_moves(game.pseudo_moves_from_algebraic("e4").into_iter(), expected_moves);
    }

    #[test]
    fn test_queen_moves_pseudo_legal() {
        let game = from_fen("8/8/8/8/3Q4/8/8/8 w - - 0 1").unwrap();
        let expected_moves = vec![
            "d4d1", "d4d2", "d4d3", "d4d5", "d4d6", "d4d7", "d4d8", "d4a4", "d4b4", "d4c4", "d4e4",
            "d4f4", "d4g4", "d4h4", "d4a7", "d4b6", "d4c5", "d4e3", "d4f2", "d4g1", //first diagonal
            "d4a1", "d4b2", "d4c3", "d4e5", "d4f6", "d4g7", "d4h8",
        ];
        assert_moves(game.pseudo_moves_from_algebraic("d4").into_iter(), expected_moves);

        // Queen on g6 with three captures and a blocked square
        let game = from_fen("4b1b1/6b1/4r1Q1/5P2/6B1/8/8/8 w - - 0 1").unwrap();
        let expected_moves = vec!["g6e8", "g6f7", "g6e6", "g6f6", "g6g7", "g6g5", "g6h5", "g6h6", "g6h7"];
        assert_moves(game.pseudo_moves_from_algebraic("g6").into_iter(), expected_moves);

        // Black queen on a5 with two captures and a blocked square
        let game = from_fen("8/b7/1b6/qb6/1P6/P7/8/8 b - - 0 1").unwrap();
        let expected_moves = vec!["a5a6", "a5a4", "a5a3", "a5b4"];
        assert_moves(game.pseudo_moves_from_algebraic("a5").into_iter(), expected_moves);
    }

    #[test]
    fn test_king_moves_pseudo_legal() {
        let game = from_fen("8/8/8/8/8/3K4/8/8 w - - 0 1").unwrap();
        let expected_moves = vec!["d3c2", "d3c3", "d3c4", "d3d2", "d3d4", "d3e2", "d3e3", "d3e4"];
        assert_moves(game.pseudo_moves_from_algebraic("d3").into_iter(), expected_moves);

        let game = from_fen("8/8/8/8/8/3k4/8/8 b - - 0 1").unwrap();
        let expected_moves = vec!["d3c2", "d3c3", "d3c4", "d3d2", "d3d4", "d3e2", "d3e3", "d3e4"];
        assert_moves(game.pseudo_moves_from_algebraic("d3").into_iter(), expected_moves);

        // White king blocked by own pieces with 3 captures
        let game = from_fen("8/8/8/3ppp2/3PKP2/3PPP2/8/8 w - - 0 1").unwrap();
        let expected_moves = vec!["e4d5", "e4e5", "e4f5"];
        assert_moves(game.pseudo_moves_from_algebraic("e4").into_iter(), expected_moves);

        // Black king blocked by own pieces with 3 captures
        let game = from_fen("8/8/8/3PPP2/3pkp2/3ppp2/8/8 b - - 0 1").unwrap();
        let expected_moves = vec!["e4d5", "e4e5", "e4f5"];
        assert_moves(game.pseudo_moves_from_algebraic("e4").into_iter(), expected_moves);

        // Black king in the h1 corner
        let game = from_fen("8/8/8/8/8/8/8/7k b - - 0 1").unwrap();
        let expected_moves = vec!["h1h2", "h1g1", "h1g2"];
        assert_moves(game.pseudo_moves_from_algebraic("h1").into_iter(), expected_moves);

        // White king in the a8 corner
        let game = from_fen("K7/8/8/8/8/8/8/8 w - - 0 1").unwrap();
        let expected_moves = vec!["a8a7", "a8b8", "a8b7"];
        assert_moves(game.pseudo_moves_from_algebraic("a8").into_iter(), expected_moves);

        // Both kings boxed in on the starting position
        let game = from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        assert_moves(game.pseudo_moves_from_algebraic("e1").into_iter(), vec![]);

        let game = from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1").unwrap();
        assert_moves(game.pseudo_moves_from_algebraic("e8").into_iter(), vec![]);
    }

    #[test]
    fn test_king_castling_pseudo_legal() {
        // White king with queen side and king side castling
        let game = from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
        assert_moves(
            game.pseudo_moves_from_algebraic("e1").into_iter(),
            vec!["e1d1", "e1f1", "e1c1", "e1g1"],
        );

        // Black king with queen side and king side castling
        let game = from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R b KQkq - 0 1").unwrap();
        assert_moves(
            game.pseudo_moves_from_algebraic("e8").into_iter(),
            vec!["e8d8", "e8f8", "e8c8", "e8g8"],
        );

        // Only the king side rook is unmoved
        let game = from_fen("1r2k2r/pppppppp/8/8/8/8/PPPPPPPP/1R2K2R w Kk - 0 1").unwrap();
        assert_moves(
            game.pseudo_moves_from_algebraic("e1").into_iter(),
            vec!["e1d1", "e1f1", "e1g1"],
        );

        let game = from_fen("1r2k2r/pppppppp/8/8/8/8/PPPPPPPP/1R2K2R b Kk - 0 1").unwrap();
        assert_moves(
            game.pseudo_moves_from_algebraic("e8").into_iter(),
            vec!["e8d8", "e8f8", "e8g8"],
        );

        // Only the queen side rook is unmoved
        let game = from_fen("r3k1r1/pppppppp/8/8/8/8/PPPPPPPP/R3K1R1 w Qq - 0 1").unwrap();
        assert_moves(
            game.pseudo_moves_from_algebraic("e1").into_iter(),
            vec!["e1d1", "e1f1", "e1c1"],
        );

        let game = from_fen("r3k1r1/pppppppp/8/8/8/8/PPPPPPPP/R3K1R1 b Qq - 0 1").unwrap();
        assert_moves(
            game.pseudo_moves_from_algebraic("e8").into_iter(),
            vec!["e8d8", "e8f8", "e8c8"],
        );

        // Castling blocked on the d and f squares
        let game = from_fen("r2bkb1r/pppppppp/8/8/8/8/PPPPPPPP/R2BKB1R w KQkq - 0 1").unwrap();
        assert_moves(game.pseudo_moves_from_algebraic("e1").into_iter(), vec![]);

        let game = from_fen("r2bkb1r/pppppppp/8/8/8/8/PPPPPPPP/R2BKB1R b KQkq - 0 1").unwrap();
        assert_moves(game.pseudo_moves_from_algebraic("e8").into_iter(), vec![]);

        // Castling blocked on the c and g squares
        let game = from_fen("r1b1k1br/pppppppp/8/8/8/8/PPPPPPPP/R1B1K1BR w KQkq - 0 1").unwrap();
        assert_moves(game.pseudo_moves_from_algebraic("e1").into_iter(), vec!["e1d1", "e1f1"]);

        let game = from_fen("r1b1k1br/pppppppp/8/8/8/8/PPPPPPPP/R1B1K1BR b KQkq - 0 1").unwrap();
        assert_moves(game.pseudo_moves_from_algebraic("e8").into_iter(), vec!["e8d8", "e8f8"]);

        // Queen side castling blocked on the b square only
        let game = from_fen("rb2k2r/pppppppp/8/8/8/8/PPPPPPPP/RB2K2R w KQkq - 0 1").unwrap();
        assert_moves(
            game.pseudo_moves_from_algebraic("e1").into_iter(),
            vec!["e1d1", "e1f1", "e1g1"],
        );

        let game = from_fen("rb2k2r/pppppppp/8/8/8/8/PPPPPPPP/RB2K2R b KQkq - 0 1").unwrap();
        assert_moves(
            game.pseudo_moves_from_algebraic("e8").into_iter(),
            vec!["e8d8", "e8f8", "e8g8"],
        );

        // Castling rejected because the f8 transit square is attacked
        let game = from_fen("1r2k2r/ppppp1pp/8/8/8/8/PPPPP1PP/R4RK1 b k - 0 1").unwrap();
        assert_moves(
            game.pseudo_moves_from_algebraic("e8").into_iter(),
            vec!["e8d8", "e8f7", "e8f8"],
        );
    }

    #[test]
    fn test_en_passant_follows_double_push() {
        let mut game = from_fen("k7/4p3/8/3P4/8/8/8/K7 b - - 0 1").unwrap();
        play(&mut game, "e7e5");
        assert_moves(
            game.pseudo_moves_from_algebraic("d5").into_iter(),
            vec!["d5d6", "d5e6"],
        );

        let mut game = from_fen("k7/8/8/8/6p1/8/5P2/K7 w - - 0 1").unwrap();
        play(&mut game, "f2f4");
        assert_moves(
            game.pseudo_moves_from_algebraic("g4").into_iter(),
            vec!["g4g3", "g4f3"],
        );

        // A single push lands beside the pawn as an ordinary capture target,
        // not an en passant one
        let mut game = from_fen("k7/4p3/8/3P4/8/8/8/K7 b - - 0 1").unwrap();
        play(&mut game, "e7e6");
        let moves = game.pseudo_moves_from_algebraic("d5");
        assert_moves(moves.iter().copied(), vec!["d5d6", "d5e6"]);
        assert!(moves.iter().all(|m| !m.is_en_passant));
    }

    #[test]
    fn test_en_passant_expires_after_one_move() {
        let mut game = from_fen("k7/4p3/8/3P4/8/8/8/K7 b - - 0 1").unwrap();
        play(&mut game, "e7e5");
        play(&mut game, "a1b1");
        play(&mut game, "a8b8");
        assert_moves(game.pseudo_moves_from_algebraic("d5").into_iter(), vec!["d5d6"]);
    }
}
