use std::cmp::Ordering;

use super::{Board, Move};

/// Index of a [`SearchNode`] inside the arena that owns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// One generated board with the way it was reached.
#[derive(Clone, Debug)]
pub struct SearchNode {
    pub board: Board,
    pub parent: Option<NodeId>,
    pub mv: Option<Move>,
    /// Moves from the start board (g).
    pub depth: u32,
    /// `depth` plus the heuristic estimate (f).
    pub cost: u32,
}

impl SearchNode {
    pub fn root(board: Board, estimate: u32) -> Self {
        SearchNode {
            board,
            parent: None,
            mv: None,
            depth: 0,
            cost: estimate,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Append-only node storage. Parents are referenced by index, so the whole
/// tree is released at once when the arena is dropped.
#[derive(Clone, Debug, Default)]
pub(crate) struct Arena {
    nodes: Vec<SearchNode>,
}

impl Arena {
    pub(crate) fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
}

/// Frontier entry. `BinaryHeap` is a max-heap, so the ordering is reversed:
/// the lowest cost compares greatest, and among equal costs the earliest
/// inserted entry wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct HeapEntry {
    pub cost: u32,
    pub sequence: u64,
    pub id: NodeId,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::*;

    fn entry(cost: u32, sequence: u64) -> HeapEntry {
        HeapEntry {
            cost,
            sequence,
            id: NodeId(sequence as usize),
        }
    }

    #[test]
    fn heap_pops_lowest_cost_first() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(5, 0));
        heap.push(entry(2, 1));
        heap.push(entry(9, 2));

        let costs: Vec<u32> = std::iter::from_fn(|| heap.pop()).map(|e| e.cost).collect();
        assert_eq!(costs, vec![2, 5, 9]);
    }

    #[test]
    fn equal_costs_pop_in_insertion_order() {
        let mut heap = BinaryHeap::new();
        for sequence in [3, 0, 4, 1, 2] {
            heap.push(entry(7, sequence));
        }

        let order: Vec<u64> = std::iter::from_fn(|| heap.pop())
            .map(|e| e.sequence)
            .collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn arena_hands_out_sequential_ids() {
        let mut arena = Arena::default();
        let root = arena.push(SearchNode::root(Board::solved(), 0));
        let child = arena.push(SearchNode {
            board: Board::solved().apply(Move::Up),
            parent: Some(root),
            mv: Some(Move::Up),
            depth: 1,
            cost: 2,
        });

        assert_eq!(root.index(), 0);
        assert_eq!(child.index(), 1);
        assert!(arena.get(root).is_root());
        assert_eq!(arena.get(child).parent, Some(root));
    }
}
