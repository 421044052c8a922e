//! Huffman compression over a flat, array-backed tree.
//!
//! The tree is a single `Vec` of weighted nodes: leaves sorted by weight,
//! then internal nodes in creation order. Code assignment and the stream
//! header are both derived by replaying the merge that built the array, so
//! only the tree's shape is ever transmitted.
//!
//! ```
//! let bits = huffarray::compress(b"abracadabra")?;
//! assert_eq!(huffarray::decompress(&bits)?, b"abracadabra");
//! # Ok::<(), huffarray::HuffmanError>(())
//! ```

pub mod bits;
pub mod codec;
pub mod codes;
pub mod error;
pub mod frequency;
pub mod header;
pub mod node;
pub mod tree;

pub use bits::{parse_bit_string, to_bit_string, BitStr, Bits, PackedBits};
pub use codec::{compress, compress_str, decompress, decompress_str, Decoder, Encoder};
pub use codes::{generate_codes, CodeTable};
pub use error::{HuffmanError, Result};
pub use frequency::{count_runs, FrequencyTable};
pub use node::{Additive, FnWeighting, Node, Weighting};
pub use tree::MergeArray;
