//! Canonical Huffman codec for the HPACK header-compression format
//! ([RFC 7541] Appendix B).
//!
//! This crate only implements the fixed, 257-symbol code book defined by
//! the RFC; it has no notion of headers, tables, or the wire framing that
//! sits around Huffman-encoded strings in HPACK proper (see the `hpack`
//! crate for that).
//!
//! [RFC 7541]: https://httpwg.org/specs/rfc7541.html

mod decoder;
mod encoder;
mod table;

pub use decoder::{decode, DecoderError};
pub use encoder::{encode, encoded_len, should_encode};

#[cfg(test)]
mod test {
    use super::*;

    fn roundtrip(src: &[u8]) {
        let mut encoded = Vec::new();
        encode(src, &mut encoded);
        let mut decoded = Vec::new();
        decode(&encoded, &mut decoded).unwrap();
        assert_eq!(decoded, src);
    }

    #[test]
    fn roundtrips_printable_ascii() {
        roundtrip(b"www.example.com");
        roundtrip(b"private, max-age=31536000");
        roundtrip(b"");
        roundtrip(b"a");
    }

    #[test]
    fn roundtrips_every_single_byte_value() {
        for b in 0u16..256 {
            roundtrip(&[b as u8]);
        }
    }

    #[test]
    fn roundtrips_repeated_bytes() {
        roundtrip(&[b'x'; 200]);
    }
}
