use super::{Board, ChessField, Color, Game, Move, Piece, PieceType, Square};

pub const INITIAL_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parses a square like "e3".
fn parse_square(square: &str) -> Result<ChessField, String> {
    ChessField::parse(square).ok_or_else(|| format!("Invalid square: {}", square))
}

/// Parses a FEN string and sets up a `Game`. The game model has no castling
/// rights or en passant fields of its own; the FEN fields are mapped onto
/// what the model does track: a missing castling right marks the matching
/// corner rook as moved, pawns off their start rank are marked moved, and an
/// en passant square is turned back into the double push that must have just
/// been played.
pub fn from_fen(fen: &str) -> Result<Game, String> {
    let mut board = Board::new();
    let parts: Vec<&str> = fen.split(' ').collect();
    if parts.len() != 6 {
        return Err(String::from("Invalid FEN string: must have 6 parts."));
    }

    // Parse board squares
    let rows: Vec<&str> = parts[0].split('/').collect();
    if rows.len() != 8 {
        return Err(String::from("Invalid FEN string: expected 8 rows"));
    }

    for (row_index, row) in rows.iter().enumerate() {
        let mut col_index = 0;

        for c in row.chars() {
            if col_index > 7 {
                return Err(String::from("Invalid FEN string: too many columns"));
            }
            if c.is_ascii_digit() {
                col_index += c.to_digit(10).unwrap() as usize;
            } else {
                let piece = match c {
                    'p' => Some((Color::Black, PieceType::Pawn)),
                    'r' => Some((Color::Black, PieceType::Rook)),
                    'n' => Some((Color::Black, PieceType::Knight)),
                    'b' => Some((Color::Black, PieceType::Bishop)),
                    'q' => Some((Color::Black, PieceType::Queen)),
                    'k' => Some((Color::Black, PieceType::King)),
                    'P' => Some((Color::White, PieceType::Pawn)),
                    'R' => Some((Color::White, PieceType::Rook)),
                    'N' => Some((Color::White, PieceType::Knight)),
                    'B' => Some((Color::White, PieceType::Bishop)),
                    'Q' => Some((Color::White, PieceType::Queen)),
                    'K' => Some((Color::White, PieceType::King)),
                    _ => None,
                };

                if let Some((color, kind)) = piece {
                    board.place(
                        ChessField::new(7 - row_index as u8, col_index as u8),
                        Piece::new(color, kind),
                    );
                    col_index += 1;
                } else {
                    return Err(format!("Invalid piece character in FEN string: {}", c));
                }
            }
        }
        if col_index > 8 {
            return Err(format!("Too many squares in row {} when parsing FEN", row_index));
        }
    }

    // Parse active color
    let active_color = match parts[1] {
        "w" => Color::White,
        "b" => Color::Black,
        _ => return Err(String::from("Invalid FEN string: invalid active color.")),
    };

    // A pawn away from its start rank has necessarily moved
    for row in 0..8u8 {
        for col in 0..8u8 {
            if let Square::Occupied(ref mut piece) = board.squares[row as usize][col as usize] {
                if piece.kind == PieceType::Pawn {
                    let start_row = match piece.color {
                        Color::White => 1,
                        Color::Black => 6,
                    };
                    if row != start_row {
                        piece.has_moved = true;
                    }
                }
            }
        }
    }

    // Castling rights: a withheld right means the corner rook counts as
    // moved. A granted right leaves king and rook unmoved, which is their
    // parsed default.
    mark_rook_moved_unless(&mut board, parts[2].contains('K'), 0, 7, Color::White);
    mark_rook_moved_unless(&mut board, parts[2].contains('Q'), 0, 0, Color::White);
    mark_rook_moved_unless(&mut board, parts[2].contains('k'), 7, 7, Color::Black);
    mark_rook_moved_unless(&mut board, parts[2].contains('q'), 7, 0, Color::Black);

    // En passant square: reconstruct the double push that produced it
    let last_move = if parts[3] == "-" {
        None
    } else {
        let en_passant = parse_square(parts[3])?;
        let (color, from_row, to_row) = match en_passant.row {
            2 => (Color::White, 1, 3),
            5 => (Color::Black, 6, 4),
            _ => {
                return Err(format!(
                    "Invalid FEN string: bad en passant square: {}",
                    parts[3]
                ))
            }
        };
        Some(Move::new(
            Piece::new(color, PieceType::Pawn),
            ChessField::new(from_row, en_passant.col),
            ChessField::new(to_row, en_passant.col),
        ))
    };

    // Parse halfmove clock
    let halfmove_clock = parts[4]
        .parse::<u8>()
        .map_err(|_| format!("Invalid FEN string: halfmove clock is not a valid number: {}", parts[4]))?;

    // Parse fullmove number
    let fullmove_number = parts[5].parse::<u16>().map_err(|_| {
        format!(
            "Invalid FEN string: fullmove number is not a valid number: {}",
            parts[5]
        )
    })?;

    Ok(Game {
        board,
        active_color,
        last_move,
        halfmove_clock,
        fullmove_number,
    })
}

fn mark_rook_moved_unless(board: &mut Board, granted: bool, row: u8, col: u8, color: Color) {
    if granted {
        return;
    }
    if let Square::Occupied(ref mut piece) = board.squares[row as usize][col as usize] {
        if piece.kind == PieceType::Rook && piece.color == color {
            piece.has_moved = true;
        }
    }
}

pub fn to_fen(game: &Game) -> String {
    let mut board_representation = String::new();

    for rank in (0..8).rev() {
        let mut empty_count = 0;

        for file in 0..8 {
            match game.board.squares[rank][file] {
                Square::Occupied(piece) => {
                    if empty_count > 0 {
                        board_representation.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    board_representation.push(piece.to_char());
                }
                Square::Empty => {
                    empty_count += 1;
                }
            }
        }

        if empty_count > 0 {
            board_representation.push_str(&empty_count.to_string());
        }

        if rank > 0 {
            board_representation.push('/');
        }
    }

    let active_color = if game.active_color() == Color::White { "w" } else { "b" };

    let mut castling = String::from("KQkq");
    for (i, right) in game.castling_rights().iter().enumerate().rev() {
        if !right {
            castling.remove(i);
        }
    }
    if castling.is_empty() {
        castling = "-".to_string();
    }

    let en_passant_square = match game.en_passant_field() {
        Some(square) => square.as_algebraic(),
        None => "-".to_string(),
    };

    format!(
        "{} {} {} {} {} {}",
        board_representation,
        active_color,
        castling,
        en_passant_square,
        game.halfmove_clock,
        game.fullmove_number
    )
}
