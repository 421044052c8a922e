use crate::bits::{BitStr, Bits};
use crate::codes::{generate_codes, CodeTable};
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::header::{read_header, write_header};
use crate::node::Additive;
use crate::tree::MergeArray;
use log::debug;

/// Byte encoder built from the symbol counts of one input.
#[derive(Debug, Clone)]
pub struct Encoder {
    tree: MergeArray<usize, u8>,
    table: CodeTable<u8>,
}

impl Encoder {
    /// Builds the tree and code table for `input`.
    pub fn new(input: &[u8]) -> Result<Self> {
        let frequencies = FrequencyTable::from_symbols(input);
        debug!(
            "{} symbols, {} distinct",
            frequencies.total(),
            frequencies.len()
        );

        let tree = MergeArray::build(frequencies.leaves(), &Additive)?;
        let table = CodeTable::from_tree(&tree, &Additive)?;

        Ok(Self { tree, table })
    }

    pub fn tree(&self) -> &MergeArray<usize, u8> {
        &self.tree
    }

    pub fn code_table(&self) -> &CodeTable<u8> {
        &self.table
    }

    /// The tree shape, framed for [`Decoder::from_header`].
    pub fn header(&self) -> Result<Bits> {
        let mut out = Bits::new();
        write_header(&self.tree, &Additive, &mut out)?;
        Ok(out)
    }

    /// Appends the code of every symbol in `stream` to `out`.
    pub fn encode_into(&self, stream: impl IntoIterator<Item = u8>, out: &mut Bits) -> Result<()> {
        for s in stream {
            let code = self.table.get(&s).ok_or(HuffmanError::UnknownSymbol(s))?;
            out.extend_from_bitslice(code);
        }

        Ok(())
    }

    pub fn encode(&self, stream: impl IntoIterator<Item = u8>) -> Result<Bits> {
        let mut out = Bits::new();
        self.encode_into(stream, &mut out)?;
        Ok(out)
    }
}

/// Byte decoder rebuilt from a header.
#[derive(Debug, Clone)]
pub struct Decoder {
    /// `(symbol, code)` ordered by code length, shortest first.
    candidates: Vec<(u8, Bits)>,
    header_len: usize,
}

impl Decoder {
    /// Parses the header at the front of `bits`.
    pub fn from_header(bits: &BitStr) -> Result<Self> {
        let (tree, header_len) = read_header(bits)?;

        let mut candidates = Vec::with_capacity(tree.leaf_count());
        generate_codes(&tree, &Additive, |position, code| {
            if let Some(&symbol) = tree.nodes()[position].symbol() {
                candidates.push((symbol, code.to_bitvec()));
            }
        })?;
        candidates.sort_by_key(|(_, code)| code.len());

        debug!(
            "header: {} bits, {} leaves, longest code {} bits",
            header_len,
            candidates.len(),
            candidates.last().map_or(0, |(_, c)| c.len())
        );

        Ok(Self {
            candidates,
            header_len,
        })
    }

    /// Number of bits the header occupied.
    pub fn header_len(&self) -> usize {
        self.header_len
    }

    pub fn codes(&self) -> impl Iterator<Item = (u8, &BitStr)> {
        self.candidates.iter().map(|(s, c)| (*s, c.as_bitslice()))
    }

    /// Decodes a payload, i.e. the bits that follow the header.
    ///
    /// A `MalformedPayload` offset counts from the start of `payload`.
    ///
    /// Codes are tried shortest first, reading only as many bits as the
    /// current candidate needs. The first match is the only possible one
    /// because the code set is prefix-free.
    pub fn decode(&self, payload: &BitStr) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut read = Bits::new();
        let mut cursor = 0;

        while cursor < payload.len() {
            let start = cursor;
            let mut matched = None;

            for (symbol, code) in &self.candidates {
                while read.len() < code.len() {
                    match payload.get(cursor) {
                        Some(bit) => read.push(*bit),
                        None => return Err(HuffmanError::MalformedPayload { offset: start }),
                    }
                    cursor += 1;
                }

                if read == *code {
                    matched = Some(*symbol);
                    break;
                }
            }

            match matched {
                Some(symbol) => {
                    out.push(symbol);
                    read.clear();
                }
                None => return Err(HuffmanError::MalformedPayload { offset: start }),
            }
        }

        Ok(out)
    }
}

/// Compresses `input` into `header ++ payload`.
pub fn compress(input: &[u8]) -> Result<Bits> {
    let encoder = Encoder::new(input)?;

    let mut out = encoder.header()?;
    let header_len = out.len();
    encoder.encode_into(input.iter().copied(), &mut out)?;

    debug!(
        "compressed {} bits into {} header + {} payload bits",
        input.len() * 8,
        header_len,
        out.len() - header_len
    );
    Ok(out)
}

/// Reverses [`compress`].
///
/// A `MalformedPayload` offset counts from the start of `bits`, header included.
pub fn decompress(bits: &BitStr) -> Result<Vec<u8>> {
    let decoder = Decoder::from_header(bits)?;
    let out = decoder
        .decode(&bits[decoder.header_len()..])
        .map_err(|e| match e {
            HuffmanError::MalformedPayload { offset } => HuffmanError::MalformedPayload {
                offset: offset + decoder.header_len(),
            },
            e => e,
        })?;

    debug!("decompressed {} bits into {} symbols", bits.len(), out.len());
    Ok(out)
}

pub fn compress_str(input: &str) -> Result<Bits> {
    compress(input.as_bytes())
}

/// Reverses [`compress_str`], failing if the decoded bytes are not UTF-8.
pub fn decompress_str(bits: &BitStr) -> Result<String> {
    String::from_utf8(decompress(bits)?)
        .map_err(|e| HuffmanError::InvalidSymbolEncoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::{parse_bit_string, to_bit_string};
    use crate::header::header_len;

    #[test]
    fn test_encode_decode() {
        let s = "This is a really long message, I sure do hope it encodes and decodes properly.";
        let out = compress_str(s).unwrap();
        assert_eq!(decompress_str(&out).unwrap(), s);
    }

    #[test]
    fn abracadabra_bitstream() {
        let out = compress(b"abracadabra").unwrap();
        let text = to_bit_string(&out);

        assert_eq!(text.len(), 65 + 23);
        assert_eq!(&text[65..], "01101110100010101101110");
        assert_eq!(decompress(&out).unwrap(), b"abracadabra");
    }

    #[test]
    fn skewed_input_uses_one_bit_per_symbol() {
        let input = b"aaaaaaaaab";
        let out = compress(input).unwrap();

        assert_eq!(out.len(), header_len(2) + input.len());
        assert_eq!(to_bit_string(&out[header_len(2)..]), "1111111110");
        assert_eq!(decompress(&out).unwrap(), input);
    }

    #[test]
    fn header_size_law() {
        for input in [
            &b"ab"[..],
            &b"hello world"[..],
            &b"the quick brown fox jumps over the lazy dog"[..],
        ] {
            let encoder = Encoder::new(input).unwrap();
            let distinct = encoder.code_table().len();
            let header = encoder.header().unwrap();
            assert_eq!(header.len(), 16 + (2 * distinct - 1) + 8 * distinct);
        }
    }

    #[test]
    fn all_byte_values() {
        let input: Vec<u8> = (0..=255u8).chain((0..=255u8).step_by(3)).collect();
        let out = compress(&input).unwrap();
        assert_eq!(decompress(&out).unwrap(), input);

        let encoder = Encoder::new(&input).unwrap();
        assert_eq!(encoder.tree().len(), 511);
        assert!(encoder.code_table().is_prefix_free());
    }

    #[test]
    fn deterministic() {
        let input = b"mississippi river banks";
        assert_eq!(compress(input).unwrap(), compress(input).unwrap());
    }

    #[test]
    fn decoder_codes_match_encoder() {
        let input = b"she sells sea shells by the sea shore";
        let encoder = Encoder::new(input).unwrap();
        let decoder = Decoder::from_header(&encoder.header().unwrap()).unwrap();

        assert_eq!(decoder.codes().count(), encoder.code_table().len());
        for (symbol, code) in decoder.codes() {
            assert_eq!(encoder.code_table().get(&symbol), Some(code));
        }

        let lengths: Vec<usize> = decoder.codes().map(|(_, c)| c.len()).collect();
        assert!(lengths.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn single_symbol_is_rejected() {
        assert_eq!(
            compress(b"aaaa"),
            Err(HuffmanError::InsufficientAlphabet { distinct: 1 })
        );
        assert_eq!(
            compress(b""),
            Err(HuffmanError::InsufficientAlphabet { distinct: 0 })
        );
    }

    #[test]
    fn unknown_symbol() {
        let encoder = Encoder::new(b"abc").unwrap();
        assert_eq!(encoder.encode(*b"abz"), Err(HuffmanError::UnknownSymbol(b'z')));
    }

    #[test]
    fn header_count_beyond_input() {
        let bits = parse_bit_string("1111111111111111101100001").unwrap();
        assert!(matches!(decompress(&bits), Err(HuffmanError::MalformedHeader(_))));
    }

    #[test]
    fn truncated_payload() {
        let mut out = compress(b"abracadabra").unwrap();
        // drop the last two bits of the final "111" code and the trailing "0"
        out.truncate(out.len() - 3);
        assert_eq!(
            decompress(&out),
            Err(HuffmanError::MalformedPayload { offset: 65 + 19 })
        );
    }

    #[test]
    fn truncated_payload_offset_within_payload() {
        let mut out = compress(b"abracadabra").unwrap();
        out.truncate(out.len() - 3);

        let decoder = Decoder::from_header(&out).unwrap();
        assert_eq!(
            decoder.decode(&out[decoder.header_len()..]),
            Err(HuffmanError::MalformedPayload { offset: 19 })
        );
    }

    #[test]
    fn impossible_shape_order_is_rejected() {
        // two internal nodes ranked before the three leaves, then a payload
        let bits = parse_bit_string(concat!(
            "0000000000000101",
            "0",
            "0",
            "101100001",
            "101100010",
            "101100011",
            "10",
        ))
        .unwrap();

        assert!(matches!(
            Decoder::from_header(&bits),
            Err(HuffmanError::MalformedHeader(_))
        ));
        assert!(matches!(decompress(&bits), Err(HuffmanError::MalformedHeader(_))));
    }

    #[test]
    fn empty_payload() {
        let encoder = Encoder::new(b"ab").unwrap();
        assert_eq!(decompress(&encoder.header().unwrap()).unwrap(), b"");
    }

    #[test]
    fn invalid_utf8() {
        let out = compress(&[0xff, 0xfe, 0xff]).unwrap();
        assert!(matches!(
            decompress_str(&out),
            Err(HuffmanError::InvalidSymbolEncoding(_))
        ));
    }
}
