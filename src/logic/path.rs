use serde::Serialize;

use super::node::Arena;
use super::{Board, Move, NodeId, SearchNode};

/// A solved search: the goal node together with every node needed to walk
/// back to the start.
#[derive(Clone, Debug)]
pub struct Solution {
    arena: Arena,
    terminal: NodeId,
}

impl Solution {
    pub(crate) fn new(arena: Arena, terminal: NodeId) -> Self {
        Solution { arena, terminal }
    }

    pub fn terminal(&self) -> &SearchNode {
        self.arena.get(self.terminal)
    }

    pub fn node(&self, id: NodeId) -> &SearchNode {
        self.arena.get(id)
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.terminal().depth as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Steps from the start board to the goal board.
    pub fn path(&self) -> Path<'_> {
        Path::new(&self.arena, self.terminal)
    }

    pub fn moves(&self) -> Vec<Move> {
        self.path().filter_map(|step| step.mv).collect()
    }

    pub fn boards(&self) -> Vec<Board> {
        self.path().map(|step| step.board).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Step {
    pub board: Board,
    /// Move that produced `board` from the previous step; `None` for the
    /// start board.
    pub mv: Option<Move>,
    pub depth: u32,
}

/// Iterator over the steps of a [`Solution`], start board first.
///
/// Only node indices are collected up front; call [`Solution::path`] again to
/// walk it a second time.
pub struct Path<'a> {
    arena: &'a Arena,
    // terminal first, popped from the back
    chain: Vec<NodeId>,
}

impl<'a> Path<'a> {
    fn new(arena: &'a Arena, terminal: NodeId) -> Self {
        let mut chain = Vec::with_capacity(arena.get(terminal).depth as usize + 1);
        let mut cursor = Some(terminal);
        while let Some(id) = cursor {
            chain.push(id);
            cursor = arena.get(id).parent;
        }

        Path { arena, chain }
    }
}

impl Iterator for Path<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let node = self.arena.get(self.chain.pop()?);
        Some(Step {
            board: node.board,
            mv: node.mv,
            depth: node.depth,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.chain.len(), Some(self.chain.len()))
    }
}

impl ExactSizeIterator for Path<'_> {}
