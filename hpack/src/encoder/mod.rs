//! Provides an implementation of the [HPACK] encoder.
//!
//! Unlike a hand-driven encoder that lets the caller pick a representation
//! per header, this encoder chooses automatically. For every `(name,
//! value)` pair it:
//!
//! 1. validates the name and value ([8.1.2.]),
//! 2. emits an **indexed header field** ([6.1.]) if the pair already has
//!    a full match in the table,
//! 3. emits a **never-indexed literal** ([6.2.3.]) if the name is known
//!    to carry sensitive values (`authorization`, `cookie`, and similar),
//! 4. otherwise tracks how many times the exact pair has been seen and
//!    only promotes it into the dynamic table, as a **literal with
//!    incremental indexing** ([6.2.1.]), once it crosses a probation
//!    threshold; until then it is written as a **literal without
//!    indexing** ([6.2.2.]).
//!
//! This keeps one-shot values (request IDs, timestamps, signed URLs) from
//! polluting the dynamic table while still letting genuinely repeated
//! values earn an index.
//!
//! [HPACK]: https://tools.ietf.org/html/rfc7541
//! [8.1.2.]: https://tools.ietf.org/html/rfc7541#section-8.1.2
//! [6.1.]: https://tools.ietf.org/html/rfc7541#section-6.1
//! [6.2.1.]: https://tools.ietf.org/html/rfc7541#section-6.2.1
//! [6.2.2.]: https://tools.ietf.org/html/rfc7541#section-6.2.2
//! [6.2.3.]: https://tools.ietf.org/html/rfc7541#section-6.2.3

mod error;
mod primitives;

use std::collections::HashMap;

pub use error::*;
use primitives::*;

use crate::header::HeaderEntry;
use crate::table::Table;
use crate::validation::{is_valid_header_name, is_valid_header_value};

const DEFAULT_MAX_DYNAMIC_SIZE: u32 = 4096;
const DEFAULT_MAX_HEADER_STRING_SIZE: usize = 8192;

/// Header names whose values are always sensitive enough to forbid
/// dynamic-table indexing, regardless of `EncodingOptions`.
const SENSITIVE_NAMES: &[&str] =
    &["authorization", "proxy-authorization", "cookie", "set-cookie"];

/// Tunable knobs for the encoder's per-header strategy (see the module
/// docs for the strategy itself).
#[derive(Debug, Clone)]
pub struct EncodingOptions {
    /// Header names, in addition to [`SENSITIVE_NAMES`], whose values are
    /// always emitted as never-indexed literals.
    pub never_index_value_for_names: Vec<String>,
    /// Number of observations of an exact `(name, value)` pair required
    /// before it is promoted into the dynamic table.
    pub probation_threshold: u32,
    /// Reserved heuristic parameter: Huffman is currently used whenever it
    /// produces a strictly shorter byte string, and this value is stored
    /// but not consulted. Kept for forward API compatibility.
    pub min_huffman_savings_percent: u8,
}

impl Default for EncodingOptions {
    fn default() -> Self {
        Self {
            never_index_value_for_names: vec![
                "etag".to_string(),
                "if-none-match".to_string(),
                "x-request-id".to_string(),
                "x-trace-id".to_string(),
            ],
            probation_threshold: 2,
            min_huffman_savings_percent: 0,
        }
    }
}

/// Encodes header lists into HPACK header blocks, one connection
/// direction at a time.
#[derive(Debug)]
pub struct Encoder {
    table: Table,
    huffman_enabled: bool,
    max_header_string_size: usize,
    options: EncodingOptions,
    candidate_pool: HashMap<(Vec<u8>, Vec<u8>), u32>,
}

impl Encoder {
    pub fn new() -> Self {
        Self::with_options(
            DEFAULT_MAX_DYNAMIC_SIZE,
            true,
            DEFAULT_MAX_HEADER_STRING_SIZE,
            EncodingOptions::default(),
        )
    }

    pub fn with_options(
        max_dynamic_size: u32,
        huffman_enabled: bool,
        max_header_string_size: usize,
        options: EncodingOptions,
    ) -> Self {
        Self {
            table: Table::new(max_dynamic_size),
            huffman_enabled,
            max_header_string_size,
            options,
            candidate_pool: HashMap::new(),
        }
    }

    /// Encodes an ordered header list into a complete HPACK block.
    ///
    /// On failure no partial block is returned and no state mutation from
    /// the failing header is retained; headers preceding it in the list
    /// have already been committed to the dynamic table by that point,
    /// since each header is fully processed (emitted and, if applicable,
    /// indexed) before the next is considered.
    pub fn encode_block<'a, I>(&mut self, headers: I) -> Result<Vec<u8>, EncoderError>
    where
        I: IntoIterator<Item = (&'a [u8], &'a [u8])>,
    {
        let mut dst = Vec::new();
        for (name, value) in headers {
            self.encode_header(name, value, &mut dst)?;
        }
        Ok(dst)
    }

    fn encode_header(&mut self, name: &[u8], value: &[u8], dst: &mut Vec<u8>) -> Result<(), EncoderError> {
        if !is_valid_header_name(name)
            || !is_valid_header_value(value)
            || name.len() > self.max_header_string_size
            || value.len() > self.max_header_string_size
        {
            return Err(EncoderError::InvalidHeader);
        }

        if let Some(index) = self.table.find_index(name, value) {
            log::trace!("hpack encoder: full match at index {index}");
            return encode_integer(index as u32, 0x80, 7, dst);
        }

        if self.is_sensitive(name) {
            log::trace!("hpack encoder: sensitive header, never indexing");
            return self.encode_never_indexed(name, value, dst);
        }

        let count = self.observe(name, value);
        if count >= self.options.probation_threshold {
            log::trace!("hpack encoder: promoting to dynamic table after {count} observations");
            self.encode_with_indexing(name, value, dst)
        } else {
            self.encode_without_indexing(name, value, dst)
        }
    }

    fn is_sensitive(&self, name: &[u8]) -> bool {
        SENSITIVE_NAMES.iter().any(|n| n.as_bytes() == name)
            || self.options.never_index_value_for_names.iter().any(|n| n.as_bytes() == name)
    }

    fn observe(&mut self, name: &[u8], value: &[u8]) -> u32 {
        let key = (name.to_vec(), value.to_vec());
        let count = self.candidate_pool.entry(key).or_insert(0);
        *count += 1;
        *count
    }

    fn encode_with_indexing(&mut self, name: &[u8], value: &[u8], dst: &mut Vec<u8>) -> Result<(), EncoderError> {
        match self.table.find_name_index(name) {
            Some(index) => encode_integer(index as u32, 0x40, 6, &mut *dst)?,
            None => {
                dst.push(0x40);
                encode_string(name, self.huffman_enabled && hpack_huffman::should_encode(name), &mut *dst)?;
            }
        }
        encode_string(value, self.huffman_enabled && hpack_huffman::should_encode(value), dst)?;
        self.table.add(HeaderEntry::new(name.to_vec(), value.to_vec())?);
        Ok(())
    }

    fn encode_without_indexing(&mut self, name: &[u8], value: &[u8], dst: &mut Vec<u8>) -> Result<(), EncoderError> {
        match self.table.find_name_index(name) {
            Some(index) => encode_integer(index as u32, 0x00, 4, &mut *dst)?,
            None => {
                dst.push(0x00);
                encode_string(name, self.huffman_enabled && hpack_huffman::should_encode(name), &mut *dst)?;
            }
        }
        encode_string(value, self.huffman_enabled && hpack_huffman::should_encode(value), dst)
    }

    fn encode_never_indexed(&mut self, name: &[u8], value: &[u8], dst: &mut Vec<u8>) -> Result<(), EncoderError> {
        match self.table.find_name_index(name) {
            Some(index) => encode_integer(index as u32, 0b0001_0000, 4, &mut *dst)?,
            None => {
                dst.push(0b0001_0000);
                encode_string(name, self.huffman_enabled && hpack_huffman::should_encode(name), &mut *dst)?;
            }
        }
        encode_string(value, self.huffman_enabled && hpack_huffman::should_encode(value), dst)
    }

    /// Resizes the dynamic table and returns the octets that must be
    /// prepended to the next emitted block so the decoder observes the
    /// same change. Returns an empty vector if the size did not change,
    /// to avoid signaling a no-op update.
    pub fn update_table_size(&mut self, new_max_size: u32) -> Result<Vec<u8>, EncoderError> {
        if new_max_size == self.table.dynamic().max_size() {
            return Ok(Vec::new());
        }
        self.table.resize(new_max_size);
        let mut dst = Vec::new();
        encode_integer(new_max_size, 0b0010_0000, 5, &mut dst)?;
        Ok(dst)
    }

    /// Clears the dynamic table and the probation counters. Call between
    /// connections; never call mid-connection, since it desynchronizes
    /// from whatever the peer's decoder has recorded.
    pub fn reset(&mut self) {
        self.table.clear();
        self.candidate_pool.clear();
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn encoder() -> Encoder {
        Encoder::with_options(4096, false, 8192, EncodingOptions::default())
    }

    #[test]
    fn full_static_match_encodes_as_indexed() {
        let mut encoder = encoder();
        let dst = encoder.encode_block(vec![(&b":method"[..], &b"GET"[..])]).unwrap();
        assert_eq!(dst, vec![0x80 | 2]);
    }

    #[test]
    fn sensitive_header_is_never_indexed() {
        let mut encoder = encoder();
        let dst = encoder.encode_block(vec![(&b"authorization"[..], &b"Bearer abc"[..])]).unwrap();
        // Index 23 exceeds the 4-bit prefix's 15-value ceiling, so it
        // spills into one continuation byte: [0x1f, 8].
        assert_eq!(&dst[..2], &[0b0001_0000 | 0x0f, 8]);
        assert!(encoder.table.dynamic().is_empty());
    }

    #[test]
    fn first_observation_is_not_indexed() {
        let mut encoder = encoder();
        let dst = encoder.encode_block(vec![(&b"x-custom"[..], &b"value-one"[..])]).unwrap();
        assert_eq!(dst[0] & 0xf0, 0x00);
        assert!(encoder.table.dynamic().is_empty());
    }

    #[test]
    fn second_observation_crosses_the_probation_threshold() {
        let mut encoder = encoder();
        encoder.encode_block(vec![(&b"x-custom"[..], &b"value-one"[..])]).unwrap();
        let dst = encoder.encode_block(vec![(&b"x-custom"[..], &b"value-one"[..])]).unwrap();
        assert_eq!(dst[0] & 0xc0, 0x40);
        assert_eq!(encoder.table.dynamic().len(), 1);
    }

    #[test]
    fn subsequent_full_match_reuses_the_new_dynamic_entry() {
        let mut encoder = encoder();
        encoder.encode_block(vec![(&b"x-custom"[..], &b"value-one"[..])]).unwrap();
        encoder.encode_block(vec![(&b"x-custom"[..], &b"value-one"[..])]).unwrap();
        let dst = encoder.encode_block(vec![(&b"x-custom"[..], &b"value-one"[..])]).unwrap();
        assert_eq!(dst, vec![0x80 | 62]);
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        let mut encoder = encoder();
        let result = encoder.encode_block(vec![(&b"Bad-Name"[..], &b"x"[..])]);
        assert_eq!(result, Err(EncoderError::InvalidHeader));
    }

    #[test]
    fn update_table_size_evicts_and_signals_change() {
        let mut encoder = encoder();
        encoder.encode_block(vec![(&b"x-a"[..], &b"1"[..])]).unwrap();
        encoder.encode_block(vec![(&b"x-a"[..], &b"1"[..])]).unwrap();
        assert_eq!(encoder.table.dynamic().len(), 1);
        let signal = encoder.update_table_size(0).unwrap();
        assert!(!signal.is_empty());
        assert!(encoder.table.dynamic().is_empty());
    }

    #[test]
    fn unchanged_table_size_emits_no_signal() {
        let mut encoder = encoder();
        let signal = encoder.update_table_size(4096).unwrap();
        assert!(signal.is_empty());
    }

    #[test]
    fn reset_clears_dynamic_table_and_candidate_pool() {
        let mut encoder = encoder();
        encoder.encode_block(vec![(&b"x-a"[..], &b"1"[..])]).unwrap();
        encoder.encode_block(vec![(&b"x-a"[..], &b"1"[..])]).unwrap();
        assert_eq!(encoder.table.dynamic().len(), 1);
        encoder.reset();
        assert!(encoder.table.dynamic().is_empty());
        let dst = encoder.encode_block(vec![(&b"x-a"[..], &b"1"[..])]).unwrap();
        assert_eq!(dst[0] & 0xf0, 0x00); // probation restarted from zero
    }
}
