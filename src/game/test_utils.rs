#[cfg(test)]
use super::{ChessField, Game, Move};

#[cfg(test)]
pub fn assert_moves<I: Iterator<Item = Move>>(generated: I, mut expected: Vec<&str>) {
    let mut generated_converted: Vec<_> = generated.map(|m| m.as_algebraic()).collect();
    generated_converted.sort();
    expected.sort();

    assert_eq!(generated_converted, expected);
}

/// Plays a move given as "e2e4", panicking when the engine rejects it.
#[cfg(test)]
pub fn play(game: &mut Game, mv: &str) -> Move {
    let from = ChessField::from_algebraic(&mv[0..2]);
    let to = ChessField::from_algebraic(&mv[2..4]);
    game.attempt_move(from, to)
        .unwrap_or_else(|e| panic!("move {} rejected: {}", mv, e))
}
