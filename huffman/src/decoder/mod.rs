//! Provides an implementation of the [canonical Huffman] decoder.
//!
//! The decoder walks a binary tree built once from the fixed code book:
//! each input bit steps left (`0`) or right (`1`) from the current node,
//! and reaching a leaf emits its symbol and resets the walk to the root.
//! A byte sequence that ends mid-code is only valid if every remaining
//! bit is `1` and there are 7 or fewer of them, the legal padding
//! produced by the encoder's trailing EOS prefix. Anything else,
//! including the EOS symbol appearing as a decoded value, is rejected.
//!
//! [canonical Huffman]: https://en.wikipedia.org/wiki/Canonical_Huffman_code

mod error;
mod tree;

pub use error::*;
use tree::Tree;

/// Decodes a Huffman-encoded `src` sequence into `dst`.
///
/// **Example:**
///
/// ```rust
/// use hpack_huffman::decode;
///
/// let mut dst = Vec::new();
/// let src = vec![0xf1, 0xe3, 0xc2, 0xe5, 0xf2, 0x3a, 0x6b, 0xa0, 0xab, 0x90, 0xf4, 0xff];
/// decode(&src, &mut dst).unwrap();
/// assert_eq!(dst, b"www.example.com");
/// ```
pub fn decode(src: &[u8], dst: &mut Vec<u8>) -> Result<(), DecoderError> {
    let tree = Tree::shared();
    let mut node = tree.root();
    let mut trailing_ones = 0usize;

    for byte in src {
        for i in (0..8).rev() {
            let bit = (byte >> i) & 1 == 1;
            node = tree.step(node, bit).ok_or(DecoderError::InvalidInput)?;

            if let Some(symbol) = tree.symbol(node) {
                if symbol == tree::EOS_SYMBOL {
                    return Err(DecoderError::InvalidInput);
                }
                dst.push(symbol as u8);
                node = tree.root();
                trailing_ones = 0;
            } else if bit {
                trailing_ones += 1;
            } else {
                trailing_ones = 0;
            }
        }
    }

    if node != tree.root() {
        // A final partial code is only legal padding if it is all ones
        // and short enough to be a prefix of the EOS code.
        if trailing_ones > 7 || !tree.is_ones_prefix(node) {
            return Err(DecoderError::InvalidInput);
        }
    }

    Ok(())
}
