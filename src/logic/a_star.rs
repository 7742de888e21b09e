use std::collections::{BinaryHeap, HashSet};

use serde::Serialize;
use tracing::{debug, trace};

use super::node::{Arena, HeapEntry};
use super::{Board, Heuristic, NodeId, SearchNode, Solution};

// f = g + h

/// Counters gathered during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub expanded: usize,
    pub generated: usize,
    pub max_frontier: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Running,
    Succeeded(NodeId),
    /// The frontier ran dry; the goal is not reachable from the start.
    Failed,
}

#[derive(Debug)]
pub struct SearchReport {
    pub solution: Option<Solution>,
    pub stats: SearchStats,
}

impl SearchReport {
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// A* over 8-puzzle boards.
///
/// The engine owns its frontier, explored set and node arena. Boards enter
/// the explored set when expanded and are never reopened; with a consistent
/// heuristic the first expansion of a board is already along a shortest path.
/// Equal-cost frontier entries are popped in insertion order, which makes
/// both the returned path and the statistics reproducible.
pub struct AStar {
    goal: Board,
    heuristic: Heuristic,
    arena: Arena,
    frontier: BinaryHeap<HeapEntry>,
    explored: HashSet<Board>,
    stats: SearchStats,
    state: SearchState,
    sequence: u64,
}

impl AStar {
    pub fn new(start: Board, goal: Board, heuristic: Heuristic) -> Self {
        let mut engine = AStar {
            goal,
            heuristic,
            arena: Arena::default(),
            frontier: BinaryHeap::new(),
            explored: HashSet::new(),
            stats: SearchStats::default(),
            state: SearchState::Running,
            sequence: 0,
        };

        let estimate = heuristic.estimate(&start, &goal);
        engine.push(SearchNode::root(start, estimate));
        engine.stats.generated = 1;

        debug!(
            heuristic = heuristic.name(),
            estimate,
            "starting search from {:?} to {:?}",
            start.tiles(),
            goal.tiles()
        );

        engine
    }

    fn push(&mut self, node: SearchNode) {
        let cost = node.cost;
        let id = self.arena.push(node);
        self.frontier.push(HeapEntry {
            cost,
            sequence: self.sequence,
            id,
        });
        self.sequence += 1;
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn explored_len(&self) -> usize {
        self.explored.len()
    }

    /// Runs one iteration of the main loop: pop the cheapest node, test it
    /// against the goal and expand it otherwise. Once the search has
    /// finished, further calls return the final state unchanged.
    pub fn step(&mut self) -> SearchState {
        if self.state != SearchState::Running {
            return self.state;
        }

        self.stats.max_frontier = self.stats.max_frontier.max(self.frontier.len());

        let Some(entry) = self.frontier.pop() else {
            self.state = SearchState::Failed;
            return self.state;
        };

        let (board, depth) = {
            let current = self.arena.get(entry.id);
            (current.board, current.depth)
        };

        if board == self.goal {
            self.state = SearchState::Succeeded(entry.id);
            return self.state;
        }

        self.explored.insert(board);
        self.stats.expanded += 1;
        trace!(cost = entry.cost, depth, "expanding {:?}", board.tiles());

        for (direction, next) in board.neighbours() {
            if self.explored.contains(&next) {
                continue;
            }

            let g = depth + 1;
            let h = self.heuristic.estimate(&next, &self.goal);
            self.push(SearchNode {
                board: next,
                parent: Some(entry.id),
                mv: Some(direction),
                depth: g,
                cost: g + h,
            });
            self.stats.generated += 1;
        }

        self.state
    }

    /// Steps until the goal is reached or the frontier is exhausted.
    pub fn run(mut self) -> SearchReport {
        while self.step() == SearchState::Running {}

        let stats = self.stats;
        let solution = match self.state {
            SearchState::Succeeded(terminal) => Some(Solution::new(self.arena, terminal)),
            _ => None,
        };

        debug!(
            heuristic = self.heuristic.name(),
            solved = solution.is_some(),
            moves = ?solution.as_ref().map(Solution::len),
            expanded = stats.expanded,
            generated = stats.generated,
            max_frontier = stats.max_frontier,
            "search finished"
        );

        SearchReport { solution, stats }
    }
}

/// Searches for a shortest move sequence from `start` to `goal`.
///
/// An unreachable goal is not an error: the report then carries no solution
/// and the statistics of the exhausted search.
pub fn search(start: Board, goal: Board, heuristic: Heuristic) -> SearchReport {
    AStar::new(start, goal, heuristic).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::Move;

    #[test]
    fn start_equal_to_goal_needs_no_expansion() {
        let goal = Board::solved();
        let report = search(goal, goal, Heuristic::Manhattan);

        let solution = report.solution.unwrap();
        assert!(solution.is_empty());
        assert_eq!(
            report.stats,
            SearchStats {
                expanded: 0,
                generated: 1,
                max_frontier: 1,
            }
        );
    }

    #[test]
    fn two_move_puzzle() {
        let start = Board::new([1, 2, 3, 4, 5, 6, 0, 7, 8]);
        for heuristic in Heuristic::ALL {
            let report = search(start, Board::solved(), heuristic);
            assert_eq!(
                report.stats,
                SearchStats {
                    expanded: 2,
                    generated: 5,
                    max_frontier: 3,
                }
            );

            let solution = report.solution.unwrap();
            assert_eq!(solution.len(), 2);
            assert_eq!(solution.moves(), vec![Move::Right, Move::Right]);
        }
    }

    #[test]
    fn step_reports_state_transitions() {
        let start = Board::new([1, 2, 3, 4, 5, 6, 7, 0, 8]);
        let mut engine = AStar::new(start, Board::solved(), Heuristic::Manhattan);

        assert_eq!(engine.state(), SearchState::Running);
        assert_eq!(engine.frontier_len(), 1);

        // expands the start board
        assert_eq!(engine.step(), SearchState::Running);
        assert_eq!(engine.explored_len(), 1);
        assert_eq!(engine.stats().expanded, 1);
        assert_eq!(engine.frontier_len(), 3);

        // pops the goal
        let state = engine.step();
        assert!(matches!(state, SearchState::Succeeded(_)));
        assert_eq!(engine.step(), state);
        assert_eq!(engine.stats().expanded, 1);
    }

    #[test]
    fn explored_boards_are_not_regenerated() {
        let start = Board::new([0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let mut engine = AStar::new(start, Board::solved(), Heuristic::Manhattan);

        engine.step();
        assert_eq!(engine.stats().generated, 3);

        // the child has three neighbours, one of them the explored start
        engine.step();
        assert_eq!(engine.stats().expanded, 2);
        assert_eq!(engine.stats().generated, 5);
    }

    #[test]
    fn unreachable_goal_fails() {
        let start = Board::new([1, 2, 3, 4, 5, 6, 8, 7, 0]);
        let report = search(start, Board::solved(), Heuristic::Manhattan);

        assert!(!report.is_solved());
        // every board of the start's half of the state space got expanded
        assert!(report.stats.expanded >= 181_440);
        assert!(report.stats.generated >= report.stats.expanded);
    }
}
