//! Array-backed Huffman tree construction.
//!
//! The whole tree lives in one `Vec`: `k` leaves sorted by ascending weight,
//! followed by the `k - 1` internal nodes in the order they were created. No
//! child links are stored; the parent/child relation is recovered by replaying
//! the same two-frontier merge that built the array.

use crate::error::{HuffmanError, Result};
use crate::node::{Node, Weighting};
use log::trace;
use std::ops::Range;

/// A cursor over a contiguous run of node positions, walked either upward or downward.
#[derive(Debug, Clone)]
pub(crate) struct Frontier {
    range: Range<usize>,
    descending: bool,
}

impl Frontier {
    pub(crate) fn ascending(range: Range<usize>) -> Self {
        Self {
            range,
            descending: false,
        }
    }

    pub(crate) fn descending(range: Range<usize>) -> Self {
        Self {
            range,
            descending: true,
        }
    }

    fn peek(&self) -> Option<usize> {
        if self.range.is_empty() {
            None
        } else if self.descending {
            Some(self.range.end - 1)
        } else {
            Some(self.range.start)
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    fn advance(&mut self) -> Option<usize> {
        if self.descending {
            self.range.next_back()
        } else {
            self.range.next()
        }
    }

    /// Makes one more position available at the far end.
    fn grow(&mut self) {
        self.range.end += 1;
    }
}

/// Takes the next node from whichever frontier comes first.
///
/// `internal_first(i, l)` decides between the heads of the internal and leaf
/// frontiers; the leaf frontier wins whenever it returns false. Once one
/// frontier is empty the other is drained.
pub(crate) fn next_node<F>(
    leaves: &mut Frontier,
    internals: &mut Frontier,
    internal_first: F,
) -> Option<usize>
where
    F: Fn(usize, usize) -> bool,
{
    match (leaves.peek(), internals.peek()) {
        (_, None) => leaves.advance(),
        (None, Some(_)) => internals.advance(),
        (Some(l), Some(i)) => {
            if internal_first(i, l) {
                internals.advance()
            } else {
                leaves.advance()
            }
        }
    }
}

/// Flat Huffman tree: leaves in `[0, k)`, internal nodes in `[k, 2k - 1)`, root last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeArray<W, S> {
    nodes: Vec<Node<W, S>>,
    leaves: usize,
}

impl<W, S> MergeArray<W, S> {
    /// Grows `leaves`, sorted ascending under `weighting`, into a full tree.
    pub fn build<G>(mut leaves: Vec<Node<W, S>>, weighting: &G) -> Result<Self>
    where
        G: Weighting<W>,
    {
        let k = leaves.len();
        if k < 2 {
            return Err(HuffmanError::InsufficientAlphabet { distinct: k });
        }
        if leaves
            .windows(2)
            .any(|w| weighting.less(w[1].weight(), w[0].weight()))
        {
            return Err(HuffmanError::UnsortedLeaves);
        }

        let total = 2 * k - 1;
        leaves.reserve_exact(k - 1);
        let mut nodes = leaves;

        let mut leaf_frontier = Frontier::ascending(0..k);
        let mut internal_frontier = Frontier::ascending(k..k);

        while nodes.len() < total {
            let (x, y) = {
                let internal_first =
                    |i: usize, l: usize| weighting.less(nodes[i].weight(), nodes[l].weight());
                (
                    next_node(&mut leaf_frontier, &mut internal_frontier, &internal_first),
                    next_node(&mut leaf_frontier, &mut internal_frontier, &internal_first),
                )
            };
            let (Some(x), Some(y)) = (x, y) else {
                unreachable!("merge frontiers ran dry with {} of {} nodes", nodes.len(), total)
            };

            trace!("merge {} + {} -> {}", x, y, nodes.len());
            let weight = weighting.combine(nodes[x].weight(), nodes[y].weight());
            nodes.push(Node::internal(weight));
            internal_frontier.grow();
        }

        Ok(Self { nodes, leaves: k })
    }

    /// Wraps nodes that are already laid out as a merge array.
    pub(crate) fn from_parts(nodes: Vec<Node<W, S>>, leaves: usize) -> Self {
        Self { nodes, leaves }
    }

    pub fn nodes(&self) -> &[Node<W, S>] {
        &self.nodes
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> Option<&Node<W, S>> {
        self.nodes.last()
    }

    /// Positions of every node in ascending merge order: the order in which
    /// construction consumed them, with the root last.
    pub fn merge_order<G>(&self, weighting: &G) -> Vec<usize>
    where
        G: Weighting<W>,
    {
        let mut leaf_frontier = Frontier::ascending(0..self.leaves);
        let mut internal_frontier = Frontier::ascending(self.leaves..self.nodes.len());
        let internal_first =
            |i: usize, l: usize| weighting.less(self.nodes[i].weight(), self.nodes[l].weight());

        std::iter::from_fn(|| next_node(&mut leaf_frontier, &mut internal_frontier, &internal_first))
            .collect()
    }
}
