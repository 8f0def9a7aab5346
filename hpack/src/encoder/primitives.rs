//! HPACK primitive encoders: the N-bit prefix integer ([5.1.]) and the
//! length-prefixed, optionally Huffman-encoded string ([5.2.]).
//!
//! [5.1.]: https://tools.ietf.org/html/rfc7541#section-5.1
//! [5.2.]: https://tools.ietf.org/html/rfc7541#section-5.2

use std::io::Write;

use crate::encoder::EncoderError;

/// Encodes `value` using HPACK's N-bit prefix integer representation and
/// writes it into `dst`. The `pattern` carries the high-order bits the
/// caller's representation reserves in the first octet (already shifted
/// into position); `prefix_bits` is the number of low-order bits
/// available to the value in that first octet.
///
/// **Integer representation ([5.1.], figure 2 & 3):**
///
/// ```txt
///   0   1   2   3   4   5   6   7
/// +---+---+---+---+---+---+---+---+
/// | ? | ? | ? |  Prefix (N bits)  |
/// +---+---+---+-------------------+
/// ```
///
/// [5.1.]: https://tools.ietf.org/html/rfc7541#section-5.1
pub fn encode_integer<W: Write>(
    value: u32,
    pattern: u8,
    prefix_bits: u8,
    mut dst: W,
) -> Result<(), EncoderError> {
    let max_prefix = (1u32 << prefix_bits) - 1;

    if value < max_prefix {
        dst.write_all(&[pattern | value as u8]).map_err(|_| EncoderError::Truncated)?;
        return Ok(());
    }

    dst.write_all(&[pattern | max_prefix as u8]).map_err(|_| EncoderError::Truncated)?;
    let mut remaining = value - max_prefix;
    while remaining >= 128 {
        dst.write_all(&[(remaining % 128) as u8 | 0x80]).map_err(|_| EncoderError::Truncated)?;
        remaining /= 128;
    }
    dst.write_all(&[remaining as u8]).map_err(|_| EncoderError::Truncated)
}

/// Encodes `value` as an HPACK string literal ([5.2.]): an `H` flag bit,
/// a 7-bit prefix integer length, then the body itself, Huffman-encoded
/// when `huffman` is set.
///
/// **String literal representation ([5.2.], figure 4):**
///
/// ```txt
///   0   1   2   3   4   5   6   7
/// +---+---+---+---+---+---+---+---+
/// | H |    String Length (7+)     |
/// +---+---------------------------+
/// |  String Data (Length octets)  |
/// +-------------------------------+
/// ```
///
/// [5.2.]: https://tools.ietf.org/html/rfc7541#section-5.2
pub fn encode_string<W: Write>(value: &[u8], huffman: bool, mut dst: W) -> Result<(), EncoderError> {
    if huffman {
        let mut body = Vec::new();
        hpack_huffman::encode(value, &mut body);
        encode_integer(body.len() as u32, 0x80, 7, &mut dst)?;
        dst.write_all(&body).map_err(|_| EncoderError::Truncated)
    } else {
        encode_integer(value.len() as u32, 0x0, 7, &mut dst)?;
        dst.write_all(value).map_err(|_| EncoderError::Truncated)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn encode_int(value: u32, pattern: u8, prefix_bits: u8) -> Vec<u8> {
        let mut dst = Vec::new();
        encode_integer(value, pattern, prefix_bits, &mut dst).unwrap();
        dst
    }

    #[test]
    fn fits_entirely_in_the_prefix() {
        assert_eq!(encode_int(10, 0, 5), vec![10]);
    }

    #[test]
    fn rfc_example_two_needs_continuation() {
        // RFC 7541 C.1.2: 1337 encoded with a 5-bit prefix is [31, 154, 10].
        assert_eq!(encode_int(1337, 0, 5), vec![31, 154, 10]);
    }

    #[test]
    fn exact_prefix_boundary_needs_one_continuation_byte() {
        assert_eq!(encode_int(31, 0, 5), vec![31, 0]);
    }

    #[test]
    fn pattern_bits_are_preserved_in_the_first_octet() {
        let dst = encode_int(2, 0x80, 7);
        assert_eq!(dst, vec![0x80 | 2]);
    }

    #[test]
    fn encodes_string_without_huffman() {
        let mut dst = Vec::new();
        encode_string(b"abc", false, &mut dst).unwrap();
        assert_eq!(dst, vec![3, b'a', b'b', b'c']);
    }

    #[test]
    fn huffman_flag_sets_high_bit_of_length() {
        let mut dst = Vec::new();
        encode_string(b"www.example.com", true, &mut dst).unwrap();
        assert_eq!(dst[0] & 0x80, 0x80);
    }
}
