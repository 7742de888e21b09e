use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use tracing::debug;

use super::{Board, Move};

#[derive(Clone, Copy, Debug)]
struct Record {
    /// Move that brings the board one step closer to the goal.
    toward_goal: Option<Move>,
    distance: u32,
}

/// Exact distance to a fixed goal for every board that can reach it, built by
/// a breadth-first flood outwards from the goal.
///
/// Covers the goal's whole component (181 440 boards), so it is meant for
/// verification rather than for answering single queries.
pub struct DistanceMap {
    goal: Board,
    records: HashMap<Board, Record>,
}

impl DistanceMap {
    pub fn new(goal: Board) -> Self {
        let mut queue = VecDeque::new();
        let mut records = HashMap::new();

        records.insert(
            goal,
            Record {
                toward_goal: None,
                distance: 0,
            },
        );
        queue.push_back((goal, 0));

        while let Some((current, step)) = queue.pop_front() {
            for (direction, next) in current.neighbours() {
                if let Entry::Vacant(slot) = records.entry(next) {
                    slot.insert(Record {
                        toward_goal: Some(direction.reverse()),
                        distance: step + 1,
                    });
                    queue.push_back((next, step + 1));
                }
            }

            if records.len() % 50_000 == 0 {
                debug!(boards = records.len(), depth = step, "building distance map");
            }
        }

        debug!(
            boards = records.len(),
            bytes = std::mem::size_of::<(Board, Record)>() * records.len(),
            "distance map built"
        );

        DistanceMap { goal, records }
    }

    pub fn goal(&self) -> &Board {
        &self.goal
    }

    /// Number of boards that can reach the goal, the goal included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fewest moves from `board` to the goal, or `None` if it is unreachable.
    pub fn distance(&self, board: &Board) -> Option<u32> {
        self.records.get(board).map(|record| record.distance)
    }

    /// One shortest path from `start` to the goal, both ends included.
    /// Empty when the goal cannot be reached.
    pub fn reconstruct_path(&self, start: Board) -> Vec<Board> {
        let mut path = Vec::new();
        let mut current = start;

        while let Some(record) = self.records.get(&current) {
            path.push(current);
            match record.toward_goal {
                Some(direction) => current = current.apply(direction),
                None => break,
            }
        }

        path
    }
}
