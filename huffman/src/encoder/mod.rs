//! Provides an implementation of the [canonical Huffman] encoder.
//!
//! Every input octet is looked up in the fixed code book and its bits are
//! packed MSB-first into the output. The final octet, if only partially
//! filled, is padded with the high-order bits of the end-of-string code,
//! which are all ones: this is what lets the decoder treat a trailing
//! run of up to seven one-bits as legal padding rather than truncation.
//!
//! [canonical Huffman]: https://en.wikipedia.org/wiki/Canonical_Huffman_code

use crate::table::CODES;

/// Encodes `src` into `dst` using the canonical Huffman code book.
///
/// **Example:**
///
/// ```rust
/// use hpack_huffman::encode;
///
/// let mut dst = Vec::new();
/// encode(b"www.example.com", &mut dst);
/// assert_eq!(dst, vec![0xf1, 0xe3, 0xc2, 0xe5, 0xf2, 0x3a, 0x6b, 0xa0, 0xab, 0x90, 0xf4, 0xff]);
/// ```
pub fn encode(src: &[u8], dst: &mut Vec<u8>) {
    let mut acc: u64 = 0;
    let mut acc_bits: u32 = 0;

    for &byte in src {
        let (code, bits) = CODES[byte as usize];
        acc = (acc << bits) | code as u64;
        acc_bits += bits as u32;

        while acc_bits >= 8 {
            acc_bits -= 8;
            dst.push(((acc >> acc_bits) & 0xff) as u8);
        }
    }

    if acc_bits > 0 {
        let pad = 8 - acc_bits;
        let last = ((acc << pad) | ((1u64 << pad) - 1)) & 0xff;
        dst.push(last as u8);
    }
}

/// Returns the number of octets `encode` would produce for `src`, without
/// allocating the encoded output.
pub fn encoded_len(src: &[u8]) -> usize {
    let bits: usize = src.iter().map(|&b| CODES[b as usize].1 as usize).sum();
    (bits + 7) / 8
}

/// Returns `true` if Huffman-encoding `src` would produce a strictly
/// shorter byte string than the literal representation.
pub fn should_encode(src: &[u8]) -> bool {
    encoded_len(src) < src.len()
}

#[cfg(test)]
mod test {
    use super::*;

    fn encode(bytes: &[u8]) -> Vec<u8> {
        let mut dst = Vec::new();
        super::encode(bytes, &mut dst);
        dst
    }

    #[test]
    fn encodes_the_rfc_example() {
        let dst = encode(b"www.example.com");
        assert_eq!(dst, vec![0xf1, 0xe3, 0xc2, 0xe5, 0xf2, 0x3a, 0x6b, 0xa0, 0xab, 0x90, 0xf4, 0xff]);
    }

    #[test]
    fn empty_input_encodes_to_empty_output() {
        assert_eq!(encode(&[]), Vec::<u8>::new());
    }

    #[test]
    fn encoded_len_matches_actual_output() {
        let src = b"this is a moderately long sentence used to size the buffer.";
        assert_eq!(encoded_len(src), encode(src).len());
    }

    #[test]
    fn should_encode_prefers_shorter_representation() {
        assert!(should_encode(b"www.example.com"));
        // Byte 0's code is 13 bits long, longer than the 8-bit literal.
        assert!(!should_encode(&[0u8; 1]));
    }
}
