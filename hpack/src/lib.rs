//! An implementation of [HPACK], the header-compression format used by
//! [HTTP/2] to avoid re-sending the same header names and values on every
//! request and response.
//!
//! The crate exposes two long-lived agents, one per connection direction:
//!
//! * [`Encoder`] turns an ordered header list into a compact octet block,
//!   automatically choosing between HPACK's indexed, literal, and
//!   never-indexed representations per header.
//! * [`Decoder`] inverts that transformation, maintaining a dynamic table
//!   that mirrors the encoder's.
//!
//! An encoder and a decoder exchanging header blocks over one HTTP/2
//! stream direction share state across calls: the dynamic table built by
//! one `encode_block` call is still present on the next. Mixing up
//! ordering, or running the same encoder against more than one logical
//! peer, desynchronizes the tables and corrupts subsequent blocks.
//!
//! For one-shot use without managing that lifecycle, see [`encode`] and
//! [`decode`].
//!
//! [HPACK]: https://tools.ietf.org/html/rfc7541
//! [HTTP/2]: https://tools.ietf.org/html/rfc7540

mod decoder;
mod encoder;
mod error;
mod header;
mod table;
mod validation;

pub use decoder::{Decoder, DecoderError};
pub use encoder::{Encoder, EncoderError, EncodingOptions};
pub use error::HpackError;
pub use header::HeaderEntry;

/// Encodes a header list with a fresh, default-configured [`Encoder`] and
/// discards it. Convenient for tests and one-off encodes; a real
/// connection should keep one `Encoder` alive for its whole lifetime
/// instead, since this function can never build dynamic-table reuse
/// across calls.
pub fn encode<'a, I>(headers: I, huffman: bool) -> Result<Vec<u8>, EncoderError>
where
    I: IntoIterator<Item = (&'a [u8], &'a [u8])>,
{
    let mut encoder = Encoder::with_options(4096, huffman, 8192, EncodingOptions::default());
    encoder.encode_block(headers)
}

/// Decodes a single header block with a fresh, default-configured
/// [`Decoder`]. See [`encode`] for the same caveat about dynamic-table
/// reuse across calls.
pub fn decode(src: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, DecoderError> {
    let mut decoder = Decoder::new();
    decoder.decode_block(src)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stateless_roundtrip() {
        let headers = vec![(&b":method"[..], &b"GET"[..]), (&b":path"[..], &b"/"[..])];
        let block = encode(headers.clone(), true).unwrap();
        let decoded = decode(&block).unwrap();
        let expected: Vec<(Vec<u8>, Vec<u8>)> =
            headers.into_iter().map(|(n, v)| (n.to_vec(), v.to_vec())).collect();
        assert_eq!(decoded, expected);
    }
}
