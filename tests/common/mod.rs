//! Board generators shared by the integration tests.

#![allow(dead_code)]

use eight_puzzle::Board;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A uniformly random board that can reach `goal`.
pub fn solvable_board<R: Rng>(goal: &Board, rng: &mut R) -> Board {
    loop {
        let board = Board::from_random(rng);
        if board.is_solvable_to(goal) {
            return board;
        }
    }
}

/// `goal` shuffled by a random walk of `steps` blank moves.
pub fn scramble<R: Rng>(goal: &Board, steps: usize, rng: &mut R) -> Board {
    let mut board = *goal;
    for _ in 0..steps {
        if let Some((_, next)) = board.neighbours().choose(rng) {
            board = next;
        }
    }
    board
}
