//! Packed bit storage and its textual `'0'/'1'` rendering.

use crate::error::{HuffmanError, Result};
use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

/// Owned, packed bitstream. Bits are stored most significant first in each byte.
pub type Bits = BitVec<u8, Msb0>;

/// Borrowed view into a [`Bits`].
pub type BitStr = BitSlice<u8, Msb0>;

/// Renders bits as a string of `'0'` and `'1'` characters.
pub fn to_bit_string(bits: &BitStr) -> String {
    bits.iter()
        .by_vals()
        .map(|b| if b { '1' } else { '0' })
        .collect()
}

/// Parses a string of `'0'` and `'1'` characters into packed bits.
pub fn parse_bit_string(s: &str) -> Result<Bits> {
    let mut out = Bits::with_capacity(s.len());
    for (position, c) in s.chars().enumerate() {
        match c {
            '0' => out.push(false),
            '1' => out.push(true),
            found => return Err(HuffmanError::InvalidBitChar { found, position }),
        }
    }

    Ok(out)
}

/// Appends the low `width` bits of `value`, most significant first.
pub(crate) fn push_uint(out: &mut Bits, value: u64, width: usize) {
    for shift in (0..width).rev() {
        out.push((value >> shift) & 1 == 1);
    }
}

/// Reads `bits` as an unsigned integer, most significant first.
pub(crate) fn read_uint(bits: &BitStr) -> u64 {
    bits.iter()
        .by_vals()
        .fold(0, |acc, b| (acc << 1) | u64::from(b))
}

/// Serializable form of a packed bitstream: the bit length plus the backing bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackedBits {
    bit_len: usize,
    data: Box<[u8]>,
}

impl PackedBits {
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    pub fn byte_len(&self) -> usize {
        self.data.len()
    }
}

impl<'a> From<&'a BitStr> for PackedBits {
    fn from(bits: &'a BitStr) -> Self {
        Self {
            bit_len: bits.len(),
            data: bits.to_bitvec().into_boxed_bitslice().into_boxed_slice(),
        }
    }
}

impl From<PackedBits> for Bits {
    fn from(packed: PackedBits) -> Self {
        let PackedBits { bit_len, data } = packed;

        let mut bv = BitBox::from_boxed_slice(data).into_bitvec();
        bv.resize(bit_len, false);
        bv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_string_round_trip() {
        let bits = parse_bit_string("1011001").unwrap();
        assert_eq!(bits.len(), 7);
        assert_eq!(bits.as_bitslice(), bits![u8, Msb0; 1, 0, 1, 1, 0, 0, 1]);
        assert_eq!(to_bit_string(&bits), "1011001");
    }

    #[test]
    fn bit_string_rejects_other_chars() {
        assert_eq!(
            parse_bit_string("01x1"),
            Err(HuffmanError::InvalidBitChar { found: 'x', position: 2 })
        );
    }

    #[test]
    fn uint_is_msb_first() {
        let mut bits = Bits::new();
        push_uint(&mut bits, 9, 16);
        assert_eq!(to_bit_string(&bits), "0000000000001001");
        assert_eq!(read_uint(&bits), 9);

        let mut bits = Bits::new();
        push_uint(&mut bits, u64::from(b'a'), 8);
        assert_eq!(to_bit_string(&bits), "01100001");
    }

    #[test]
    fn packed_bits_msgpack() {
        let bits = parse_bit_string("110100111").unwrap();
        let packed = PackedBits::from(bits.as_bitslice());
        assert_eq!(packed.bit_len(), 9);
        assert_eq!(packed.byte_len(), 2);

        let data = rmp_serde::to_vec(&packed).unwrap();
        let restored: PackedBits = rmp_serde::from_slice(&data).unwrap();
        assert_eq!(restored, packed);
        assert_eq!(Bits::from(restored), bits);
    }
}
