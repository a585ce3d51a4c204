use crate::game::Game;

/// Counts the leaves of the legal move tree. The standard acceptance harness
/// for the move generator: the counts at promotion-free depths must match
/// the published values.
pub fn perft(game: &Game, depth: u8) -> u64 {
    let mut node_count = 0u64;

    if depth == 0 {
        return 1u64;
    }

    for mv in game.all_legal_moves() {
        let mut next = game.clone();
        next.commit(mv);
        node_count += perft(&next, depth - 1);
    }
    node_count
}

/// Per-root-move node counts, sorted by move, for comparing against another
/// engine's breakdown.
pub fn perft_divide(game: &Game, depth: u8) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut results: Vec<(String, u64)> = game
        .all_legal_moves()
        .into_iter()
        .map(|mv| {
            let mut next = game.clone();
            next.commit(mv);
            (mv.as_algebraic(), perft(&next, depth - 1))
        })
        .collect();
    results.sort();
    results
}
