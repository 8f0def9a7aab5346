use std::{error, fmt};

/// Failure kinds produced by the encoder, the decoder, and the tables they
/// share. All are fatal to the block currently being processed.
#[derive(Debug, PartialEq)]
pub enum HpackError {
    /// A header name or value failed validation, or exceeded a configured
    /// size limit.
    InvalidHeader,
    /// An HPACK integer was malformed: more than 5 continuation octets, or
    /// the accumulated value overflowed.
    MalformedInteger,
    /// A Huffman-encoded string contained an illegal code, the EOS symbol,
    /// or illegal trailing padding.
    InvalidHuffmanCode,
    /// The input ended before an integer or string could be fully read.
    Truncated,
    /// The representation's leading byte, or an index it carries, was not
    /// valid HPACK.
    ProtocolError,
    /// The cumulative size of the decoded header list exceeded the
    /// configured limit.
    HeaderListTooLarge,
    /// A header entry's computed size could not be represented.
    Overflow,
}

impl fmt::Display for HpackError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidHeader => write!(fmt, "Invalid header name or value."),
            Self::MalformedInteger => write!(fmt, "Malformed HPACK integer."),
            Self::InvalidHuffmanCode => write!(fmt, "Invalid Huffman sequence."),
            Self::Truncated => write!(fmt, "Unexpected end of input."),
            Self::ProtocolError => write!(fmt, "Invalid HPACK representation."),
            Self::HeaderListTooLarge => write!(fmt, "Decoded header list exceeds the configured size limit."),
            Self::Overflow => write!(fmt, "Header entry size overflowed."),
        }
    }
}

impl error::Error for HpackError {}

impl From<hpack_huffman::DecoderError> for HpackError {
    fn from(_: hpack_huffman::DecoderError) -> Self {
        Self::InvalidHuffmanCode
    }
}
