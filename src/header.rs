//! Tree shape framing.
//!
//! Layout: a 16-bit node count, most significant bit first, then one entry per
//! node in ascending merge order. An entry is a single shape bit, `1` for a
//! leaf followed by its 8-bit symbol, or `0` for an internal node. Weights are
//! never written; the decoder only needs the relative order of nodes.

use crate::bits::{push_uint, read_uint, BitStr, Bits};
use crate::error::{HuffmanError, Result};
use crate::node::{Node, Weighting};
use crate::tree::MergeArray;

/// Width of the node count field.
pub const COUNT_BITS: usize = 16;

/// Width of a leaf's symbol payload.
pub const SYMBOL_BITS: usize = 8;

/// Header length for a tree with `leaves` leaves.
pub fn header_len(leaves: usize) -> usize {
    COUNT_BITS + (2 * leaves).saturating_sub(1) + SYMBOL_BITS * leaves
}

/// Appends the shape of `tree` to `out`.
pub fn write_header<W, G>(tree: &MergeArray<W, u8>, weighting: &G, out: &mut Bits) -> Result<()>
where
    G: Weighting<W>,
{
    let count = u16::try_from(tree.len()).map_err(|_| HuffmanError::TooManyNodes(tree.len()))?;
    out.reserve(header_len(tree.leaf_count()));
    push_uint(out, u64::from(count), COUNT_BITS);

    for position in tree.merge_order(weighting) {
        match tree.nodes()[position].symbol() {
            Some(&symbol) => {
                out.push(true);
                push_uint(out, u64::from(symbol), SYMBOL_BITS);
            }
            None => out.push(false),
        }
    }

    Ok(())
}

/// Rebuilds a shape-only tree from the front of `bits`.
///
/// Each node's weight is its position in the header stream, which preserves
/// the ordering the encoder walked. Returns the tree and the number of bits
/// the header occupied.
pub fn read_header(bits: &BitStr) -> Result<(MergeArray<usize, u8>, usize)> {
    if bits.len() < COUNT_BITS {
        return Err(HuffmanError::malformed_header(format!(
            "{} bits is too short for the node count",
            bits.len()
        )));
    }
    let total = read_uint(&bits[..COUNT_BITS]) as usize;
    if total < 3 || total % 2 == 0 {
        return Err(HuffmanError::malformed_header(format!(
            "{} is not a valid node count",
            total
        )));
    }

    let leaves = total / 2 + 1;
    let needed = total + SYMBOL_BITS * leaves;
    let available = bits.len() - COUNT_BITS;
    if needed > available {
        return Err(HuffmanError::malformed_header(format!(
            "{} nodes need {} bits, only {} remain",
            total, needed, available
        )));
    }

    let mut leaf_nodes = Vec::with_capacity(leaves);
    let mut internal_nodes = Vec::with_capacity(total - leaves);
    let mut cursor = COUNT_BITS;

    for rank in 0..total {
        let is_leaf = bits[cursor];
        cursor += 1;

        if is_leaf {
            if leaf_nodes.len() == leaves {
                return Err(HuffmanError::malformed_header(format!(
                    "more than {} leaves in a {} node tree",
                    leaves, total
                )));
            }
            let symbol = read_uint(&bits[cursor..cursor + SYMBOL_BITS]) as u8;
            cursor += SYMBOL_BITS;
            leaf_nodes.push(Node::leaf(rank, symbol));
        } else {
            if internal_nodes.len() == total - leaves {
                return Err(HuffmanError::malformed_header(format!(
                    "more than {} internal nodes in a {} node tree",
                    total - leaves,
                    total
                )));
            }
            internal_nodes.push(Node::internal(rank));
        }
    }

    let mut nodes = leaf_nodes;
    nodes.append(&mut internal_nodes);

    Ok((MergeArray::from_parts(nodes, leaves), cursor))
}
