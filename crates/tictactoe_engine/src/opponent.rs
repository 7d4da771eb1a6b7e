//! Automatic opponent: a uniformly random empty cell.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

use crate::{Board, Cell, Mark};

/// Picks a uniformly random empty position, or `None` on a full board.
#[instrument(skip(rng), fields(board = %board))]
pub fn pick_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let empty = board.empty_positions();
    let pos = empty.choose(rng).copied();
    debug!(candidates = empty.len(), ?pos, "Opponent chose position");
    pos
}

/// Places `mark` on a random empty cell and returns the chosen position.
pub fn place_random<R: Rng + ?Sized>(board: &mut Board, mark: Mark, rng: &mut R) -> Option<usize> {
    let pos = pick_move(board, rng)?;
    board.set(pos, Cell::Occupied(mark)).ok()?;
    Some(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::decode("XOXXOOOXX").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_move(&board, &mut rng), None);
    }

    #[test]
    fn test_single_empty_cell_is_always_chosen() {
        let board = Board::decode("XOXXO-OXO").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(pick_move(&board, &mut rng), Some(5));
        }
    }

    #[test]
    fn test_only_empty_cells_are_chosen() {
        let board = Board::decode("X-O-X-O--").unwrap();
        let allowed: HashSet<usize> = board.empty_positions().into_iter().collect();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let pos = pick_move(&board, &mut rng).unwrap();
            assert!(allowed.contains(&pos));
            seen.insert(pos);
        }
        // Every empty cell is reachable
        assert_eq!(seen, allowed);
    }

    #[test]
    fn test_place_random_marks_board() {
        let mut board = Board::decode("-X-------").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let pos = place_random(&mut board, Mark::O, &mut rng).unwrap();
        assert_ne!(pos, 1);
        assert_eq!(board.get(pos), Some(Cell::Occupied(Mark::O)));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = Board::decode("---------").unwrap();
        let a = pick_move(&board, &mut StdRng::seed_from_u64(99));
        let b = pick_move(&board, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
