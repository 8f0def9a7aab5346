//! HPACK primitive decoders, the mirror image of
//! [`crate::encoder::primitives`].

use crate::decoder::DecoderError;

/// Maximum number of continuation octets accepted while decoding an
/// integer; guards against an unbounded read for a pathological input.
const MAX_CONTINUATION_BYTES: usize = 5;

/// Decodes an HPACK N-bit prefix integer from the start of `src`.
/// Returns the decoded value and the number of octets consumed,
/// including the prefix octet.
pub fn decode_integer(src: &[u8], prefix_bits: u8) -> Result<(u32, usize), DecoderError> {
    let first = *src.first().ok_or(DecoderError::Truncated)?;
    let max_prefix = (1u32 << prefix_bits) - 1;
    let prefix_value = (first as u32) & max_prefix;

    if prefix_value < max_prefix {
        return Ok((prefix_value, 1));
    }

    let mut value = max_prefix;
    let mut consumed = 1;
    let mut shift: u32 = 0;

    loop {
        if consumed - 1 >= MAX_CONTINUATION_BYTES {
            return Err(DecoderError::MalformedInteger);
        }
        let byte = *src.get(consumed).ok_or(DecoderError::Truncated)?;
        consumed += 1;

        let addend = ((byte & 0x7f) as u64) << shift;
        let next = value as u64 + addend;
        value = u32::try_from(next).map_err(|_| DecoderError::MalformedInteger)?;

        if byte & 0x80 == 0 {
            return Ok((value, consumed));
        }
        shift += 7;
    }
}

/// Decodes an HPACK string literal from the start of `src`: the `H` flag,
/// the length prefix, and the body (Huffman-decoded when `H` is set).
/// Returns the decoded bytes and the total number of octets consumed.
pub fn decode_string(src: &[u8]) -> Result<(Vec<u8>, usize), DecoderError> {
    let first = *src.first().ok_or(DecoderError::Truncated)?;
    let huffman = first & 0x80 == 0x80;
    let (len, prefix_len) = decode_integer(src, 7)?;
    let len = len as usize;

    let body_start = prefix_len;
    let body_end = body_start.checked_add(len).ok_or(DecoderError::MalformedInteger)?;
    let body = src.get(body_start..body_end).ok_or(DecoderError::Truncated)?;

    let decoded = if huffman {
        let mut dst = Vec::new();
        hpack_huffman::decode(body, &mut dst)?;
        dst
    } else {
        body.to_vec()
    };

    if !crate::validation::is_valid_header_value(&decoded) {
        return Err(DecoderError::ProtocolError);
    }

    Ok((decoded, body_end))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decodes_value_fitting_in_the_prefix() {
        assert_eq!(decode_integer(&[10], 5), Ok((10, 1)));
    }

    #[test]
    fn decodes_rfc_example_two() {
        assert_eq!(decode_integer(&[31, 154, 10], 5), Ok((1337, 3)));
    }

    #[test]
    fn rejects_truncated_continuation() {
        assert_eq!(decode_integer(&[31, 154], 5), Err(DecoderError::Truncated));
    }

    #[test]
    fn rejects_overlong_continuation_chain() {
        let src = [255, 255, 255, 255, 255, 255, 255];
        assert_eq!(decode_integer(&src, 7), Err(DecoderError::MalformedInteger));
    }

    #[test]
    fn decodes_plain_string() {
        let src = [3, b'a', b'b', b'c'];
        assert_eq!(decode_string(&src), Ok((b"abc".to_vec(), 4)));
    }

    #[test]
    fn decodes_huffman_string() {
        let mut body = Vec::new();
        hpack_huffman::encode(b"www.example.com", &mut body);
        let mut src = vec![0x80 | body.len() as u8];
        src.extend_from_slice(&body);
        assert_eq!(decode_string(&src), Ok((b"www.example.com".to_vec(), src.len())));
    }

    #[test]
    fn rejects_control_characters_in_decoded_value() {
        let src = [1, 0x00];
        assert_eq!(decode_string(&src), Err(DecoderError::ProtocolError));
    }
}
