use serde::Serialize;

use super::{Board, CELLS, SIDE};

/// Estimate of the number of moves left to reach a goal board.
///
/// Both variants are admissible and consistent on the 8-puzzle, so A* returns
/// an optimal path with either one. They differ only in how many nodes the
/// search has to expand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Sum of row and column distances of every tile to its goal cell.
    Manhattan,
    /// Number of tiles not on their goal cell.
    #[value(name = "misplaced")]
    MisplacedTiles,
}

impl Heuristic {
    pub const ALL: [Heuristic; 2] = [Heuristic::Manhattan, Heuristic::MisplacedTiles];

    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Manhattan => "Manhattan Distance",
            Heuristic::MisplacedTiles => "Misplaced Tiles",
        }
    }

    pub fn estimate(&self, current: &Board, goal: &Board) -> u32 {
        match self {
            Heuristic::Manhattan => manhattan(current, goal),
            Heuristic::MisplacedTiles => misplaced(current, goal),
        }
    }
}

fn manhattan(current: &Board, goal: &Board) -> u32 {
    let mut goal_index = [0usize; CELLS];
    for (i, &tile) in goal.tiles().iter().enumerate() {
        goal_index[tile as usize] = i;
    }

    current
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(i, &tile)| {
            let target = goal_index[tile as usize];
            let rows = (i / SIDE).abs_diff(target / SIDE);
            let cols = (i % SIDE).abs_diff(target % SIDE);
            (rows + cols) as u32
        })
        .sum()
}

fn misplaced(current: &Board, goal: &Board) -> u32 {
    current
        .tiles()
        .iter()
        .zip(goal.tiles())
        .filter(|&(&tile, &wanted)| tile != 0 && tile != wanted)
        .count() as u32
}
