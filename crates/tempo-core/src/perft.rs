//! Perft (performance test) for verifying the make/unmake adapter.

use crate::move_list::MoveFilter;
use crate::position::Position;

/// Count the number of leaf nodes at the given depth.
///
/// Walks the tree with in-place make/unmake so the undo stack is exercised
/// exactly as the search uses it. Depth 1 is bulk-counted.
pub fn perft(position: &mut Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = position.legal_moves(MoveFilter::All);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in &moves {
        position.make_move(*mv);
        nodes += perft(position, depth - 1);
        position.unmake_move();
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(uci_move, node_count)` pairs sorted alphabetically.
pub fn divide(position: &mut Position, depth: usize) -> Vec<(String, u64)> {
    let moves = position.legal_moves(MoveFilter::All);
    let mut results: Vec<(String, u64)> = moves
        .as_slice()
        .iter()
        .map(|mv| {
            position.make_move(*mv);
            let count = if depth <= 1 { 1 } else { perft(position, depth - 1) };
            position.unmake_move();
            (mv.to_uci(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kiwipete() -> Position {
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"
            .parse()
            .unwrap()
    }

    #[test]
    fn perft_startpos() {
        let mut position = Position::starting_position();
        assert_eq!(perft(&mut position, 1), 20);
        assert_eq!(perft(&mut position, 2), 400);
        assert_eq!(perft(&mut position, 3), 8_902);
        assert_eq!(position.applied(), 0);
    }

    #[test]
    fn perft_kiwipete() {
        let mut position = kiwipete();
        assert_eq!(perft(&mut position, 1), 48);
        assert_eq!(perft(&mut position, 2), 2_039);
        assert_eq!(perft(&mut position, 3), 97_862);
    }

    #[test]
    fn perft_en_passant_and_promotion_position() {
        // CPW position 3
        let mut position: Position = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1".parse().unwrap();
        assert_eq!(perft(&mut position, 1), 14);
        assert_eq!(perft(&mut position, 2), 191);
        assert_eq!(perft(&mut position, 3), 2_812);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut position = Position::starting_position();
        let total: u64 = divide(&mut position, 3).iter().map(|(_, n)| n).sum();
        assert_eq!(total, 8_902);
        assert!(divide(&mut position, 1).iter().any(|(mv, _)| mv == "e2e4"));
    }
}
