//! Optimal 8-puzzle solver.
//!
//! [`logic::search`] runs A* from a start board to a goal board with one of the
//! [`logic::Heuristic`]s and returns the shortest move sequence together with
//! search statistics. [`logic::DistanceMap`] computes exact distances by
//! breadth-first search and is used to check the A* results.

pub mod error;
pub mod logic;

pub use error::PuzzleError;
pub use logic::{
    search, AStar, Board, DistanceMap, Heuristic, Move, SearchReport, SearchState, SearchStats,
    Solution, Step,
};
