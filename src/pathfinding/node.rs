//! Search-tree bookkeeping for a single A* invocation.
//!
//! Nodes live in an arena and refer to their parent by index, so the tree is
//! dropped in one go when the search returns. The open set is a binary heap
//! keyed on `(f, insertion order)`; a cheaper route to a queued cell rewrites
//! the arena node and queues a fresh entry, leaving the old one to be skipped
//! as stale when it surfaces.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use hashbrown::HashMap;
use ordered_float::OrderedFloat;

use crate::grid::GridCell;

/// Element of the search tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathNode {
    /// Grid cell this node stands for.
    pub cell: GridCell,
    /// Accumulated cost from the start cell.
    pub g: f32,
    /// Heuristic estimate to the goal cell.
    pub h: f32,
    /// Arena index of the node this one was reached from.
    pub parent: Option<usize>,
}

impl PathNode {
    /// Estimated total cost through this node.
    #[must_use]
    pub fn f(&self) -> f32 {
        self.g + self.h
    }
}

type HeapEntry = Reverse<(OrderedFloat<f32>, u64, usize)>;

/// Arena plus open/closed bookkeeping.
#[derive(Debug, Default)]
pub(crate) struct SearchTree {
    nodes: Vec<PathNode>,
    index_of: HashMap<GridCell, usize>,
    closed: Vec<bool>,
    open: BinaryHeap<HeapEntry>,
    pushes: u64,
}

/// Result of offering a candidate route to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Offer {
    Inserted,
    Relaxed,
    Ignored,
}

impl SearchTree {
    pub(crate) fn with_root(cell: GridCell, h: f32) -> Self {
        let mut tree = Self::default();
        tree.offer(cell, 0.0, h, None);
        tree
    }

    pub(crate) fn node(&self, index: usize) -> Option<&PathNode> {
        self.nodes.get(index)
    }

    pub(crate) fn is_closed(&self, cell: GridCell) -> bool {
        self.index_of
            .get(&cell)
            .and_then(|&index| self.closed.get(index))
            .copied()
            .unwrap_or(false)
    }

    /// Records a route to `cell` if it is new or cheaper than the queued one.
    pub(crate) fn offer(&mut self, cell: GridCell, g: f32, h: f32, parent: Option<usize>) -> Offer {
        let candidate = PathNode { cell, g, h, parent };
        let (index, outcome) = match self.index_of.get(&cell).copied() {
            None => {
                let index = self.nodes.len();
                self.nodes.push(candidate);
                self.closed.push(false);
                self.index_of.insert(cell, index);
                (index, Offer::Inserted)
            }
            Some(index) => match self.nodes.get_mut(index) {
                Some(existing) if g < existing.g => {
                    *existing = candidate;
                    (index, Offer::Relaxed)
                }
                _ => return Offer::Ignored,
            },
        };
        self.open
            .push(Reverse((OrderedFloat(candidate.f()), self.pushes, index)));
        self.pushes += 1;
        outcome
    }

    /// Pops the open node with the lowest `f`, earliest queued on ties.
    ///
    /// Stale heap entries (superseded by a relaxation or already closed) are
    /// discarded without being reported.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        while let Some(Reverse((f, _, index))) = self.open.pop() {
            let Some(node) = self.nodes.get(index) else {
                continue;
            };
            let already_closed = self.closed.get(index).copied().unwrap_or(true);
            if already_closed || OrderedFloat(node.f()) != f {
                continue;
            }
            if let Some(flag) = self.closed.get_mut(index) {
                *flag = true;
            }
            return Some(index);
        }
        None
    }

    /// Walks parent links from `index` back to the root, root first.
    pub(crate) fn trace(&self, index: usize) -> Vec<PathNode> {
        let mut chain = Vec::new();
        let mut cursor = Some(index);
        while let Some(current) = cursor {
            let Some(node) = self.nodes.get(current) else {
                break;
            };
            chain.push(*node);
            cursor = node.parent;
        }
        chain.reverse();
        chain
    }
}
