//! Error type shared by every stage of the codec.

use thiserror::Error;

/// Errors produced while building trees, framing headers or decoding payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuffmanError {
    /// Tree construction needs at least two leaves.
    #[error("at least two distinct symbols are required, found {distinct}")]
    InsufficientAlphabet { distinct: usize },

    /// Leaves handed to the tree builder were not in ascending weight order.
    #[error("leaf weights are not in ascending order")]
    UnsortedLeaves,

    /// The tree has more nodes than the 16-bit count field can describe.
    #[error("tree with {0} nodes does not fit a 16-bit node count")]
    TooManyNodes(usize),

    /// A symbol being encoded has no code in the table.
    #[error("symbol {0:#04x} has no code")]
    UnknownSymbol(u8),

    /// The header could not be parsed into a tree shape.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// The payload ran out, or stopped matching any code, at `offset`.
    #[error("malformed payload: no code matches at bit {offset}")]
    MalformedPayload { offset: usize },

    /// Decoded symbols could not be turned into the requested representation.
    #[error("invalid symbol encoding: {0}")]
    InvalidSymbolEncoding(String),

    /// A textual bitstream contained something other than '0' or '1'.
    #[error("invalid bit character {found:?} at position {position}")]
    InvalidBitChar { found: char, position: usize },
}

impl HuffmanError {
    pub(crate) fn malformed_header<S: Into<String>>(reason: S) -> Self {
        Self::MalformedHeader(reason.into())
    }
}

pub type Result<T, E = HuffmanError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            HuffmanError::InsufficientAlphabet { distinct: 1 }.to_string(),
            "at least two distinct symbols are required, found 1"
        );
        assert_eq!(
            HuffmanError::UnknownSymbol(0x41).to_string(),
            "symbol 0x41 has no code"
        );
        assert_eq!(
            HuffmanError::malformed_header("truncated").to_string(),
            "malformed header: truncated"
        );
        assert_eq!(
            HuffmanError::MalformedPayload { offset: 7 }.to_string(),
            "malformed payload: no code matches at bit 7"
        );
        assert_eq!(
            HuffmanError::InvalidBitChar { found: '2', position: 3 }.to_string(),
            "invalid bit character '2' at position 3"
        );
    }
}
