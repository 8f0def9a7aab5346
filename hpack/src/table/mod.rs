//! Unified indexing over the static table and a connection's dynamic
//! table, addressed by the single 1-based index space HPACK uses on the
//! wire: 1..61 is static, 62.. is dynamic with 62 the newest entry.

mod dynamic_table;
mod static_table;

pub use dynamic_table::DynamicTable;

use crate::header::HeaderEntry;

const STATIC_LEN: usize = 61;

/// Owns a connection's dynamic table and resolves lookups across both
/// halves of the index space. Both `Encoder` and `Decoder` hold one of
/// these; the lookup and mutation semantics are identical on either side.
#[derive(Debug)]
pub struct Table {
    dynamic: DynamicTable,
}

impl Table {
    pub fn new(max_dynamic_size: u32) -> Self {
        Self { dynamic: DynamicTable::new(max_dynamic_size) }
    }

    pub fn dynamic(&self) -> &DynamicTable {
        &self.dynamic
    }

    pub fn resize(&mut self, new_max_size: u32) {
        self.dynamic.resize(new_max_size);
    }

    pub fn add(&mut self, entry: HeaderEntry) {
        self.dynamic.add(entry);
    }

    pub fn clear(&mut self) {
        self.dynamic.clear();
    }

    /// Resolves a 1-based wire index into a borrowed `(name, value)` pair.
    pub fn get(&self, index: usize) -> Option<(Vec<u8>, Vec<u8>)> {
        if index == 0 {
            return None;
        }
        if index <= STATIC_LEN {
            return static_table::get(index).map(|(n, v)| (n.as_bytes().to_vec(), v.as_bytes().to_vec()));
        }
        let relative = index - STATIC_LEN - 1;
        self.dynamic.get(relative).map(|e| (e.name().to_vec(), e.value().to_vec()))
    }

    /// Smallest 1-based index whose entry matches both name and value.
    /// Static entries are always preferred over dynamic ones, matching
    /// the order they appear in the unified index space.
    pub fn find_index(&self, name: &[u8], value: &[u8]) -> Option<usize> {
        if let Some(i) = static_table::find_index(name, value) {
            return Some(i);
        }
        self.dynamic.find_index(name, value).map(|j| STATIC_LEN + 1 + j)
    }

    /// Smallest 1-based index whose entry name matches, regardless of
    /// value.
    pub fn find_name_index(&self, name: &[u8]) -> Option<usize> {
        if let Some(i) = static_table::find_name_index(name) {
            return Some(i);
        }
        self.dynamic.find_name_index(name).map(|j| STATIC_LEN + 1 + j)
    }

    /// Total number of addressable entries (static plus dynamic).
    pub fn len(&self) -> usize {
        STATIC_LEN + self.dynamic.len()
    }
}
