//! Prefix code assignment from a merge array.

use crate::bits::{to_bit_string, BitStr, Bits};
use crate::error::{HuffmanError, Result};
use crate::node::Weighting;
use crate::tree::{next_node, Frontier, MergeArray};
use log::trace;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Walks `tree` from the root and calls `emit(position, code)` once per leaf.
///
/// Children are not stored, so each internal node's two children are found by
/// replaying the construction merge backwards from the heavy end. The first
/// child selected gets a `1` appended to its parent's code, the second a `0`.
/// Ties go to the internal frontier here, mirroring construction where leaves
/// win them.
pub fn generate_codes<W, S, G, F>(tree: &MergeArray<W, S>, weighting: &G, mut emit: F) -> Result<()>
where
    G: Weighting<W>,
    F: FnMut(usize, &BitStr),
{
    let nodes = tree.nodes();
    let leaves = tree.leaf_count();

    let mut leaf_frontier = Frontier::descending(0..leaves);
    let mut internal_frontier = Frontier::descending(leaves..nodes.len());
    let internal_first =
        |i: usize, l: usize| !weighting.less(nodes[i].weight(), nodes[l].weight());

    let mut queue: VecDeque<(usize, Bits)> = VecDeque::with_capacity(nodes.len());
    // the root is the heaviest internal node, or the lone leaf of a one-node tree
    match next_node(&mut leaf_frontier, &mut internal_frontier, |_, _| true) {
        Some(root) => queue.push_back((root, Bits::new())),
        None => return Ok(()),
    }

    let mut emitted = 0;
    while let Some((node, code)) = queue.pop_front() {
        if node < leaves {
            trace!("leaf {} -> {}", node, to_bit_string(&code));
            emit(node, &code);
            emitted += 1;
            continue;
        }

        for bit in [true, false] {
            let child = next_node(&mut leaf_frontier, &mut internal_frontier, &internal_first)
                .ok_or_else(|| {
                    HuffmanError::malformed_header(format!("internal node {} is missing a child", node))
                })?;
            let mut child_code = code.clone();
            child_code.push(bit);
            queue.push_back((child, child_code));
        }
    }

    if emitted != leaves || !leaf_frontier.is_empty() || !internal_frontier.is_empty() {
        return Err(HuffmanError::malformed_header(format!(
            "only {} of {} leaves are reachable from the root",
            emitted, leaves
        )));
    }

    Ok(())
}

/// Symbol to prefix code lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S>
where
    S: Eq + Hash,
{
    codes: HashMap<S, Bits>,
}

impl<S> CodeTable<S>
where
    S: Eq + Hash + Clone,
{
    /// Assigns a code to every leaf of `tree`.
    pub fn from_tree<W, G>(tree: &MergeArray<W, S>, weighting: &G) -> Result<Self>
    where
        G: Weighting<W>,
    {
        let mut codes = HashMap::with_capacity(tree.leaf_count());
        generate_codes(tree, weighting, |position, code| {
            if let Some(symbol) = tree.nodes()[position].symbol() {
                codes.insert(symbol.clone(), code.to_bitvec());
            }
        })?;

        Ok(Self { codes })
    }

    pub fn get(&self, symbol: &S) -> Option<&BitStr> {
        self.codes.get(symbol).map(Bits::as_bitslice)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitStr)> {
        self.codes.iter().map(|(s, c)| (s, c.as_bitslice()))
    }

    /// True when no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&Bits> = self.codes.values().collect();
        codes.sort_by_key(|c| c.len());
        codes.iter().enumerate().all(|(n, short)| {
            codes[n + 1..]
                .iter()
                .all(|long| !long.starts_with(short.as_bitslice()))
        })
    }
}
