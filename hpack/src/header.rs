use crate::error::HpackError;

/// RFC 7541 §4.1: every entry in the tables carries 32 bytes of overhead
/// on top of its literal octets, approximating the cost of storing it in
/// a real connection's memory.
const ENTRY_OVERHEAD: u32 = 32;

/// A single name/value pair, as stored in the static or dynamic table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    name: Vec<u8>,
    value: Vec<u8>,
    size: u32,
}

impl HeaderEntry {
    pub fn new(name: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Result<Self, HpackError> {
        let name = name.into();
        let value = value.into();
        let size = Self::compute_size(&name, &value)?;
        Ok(Self { name, value, size })
    }

    fn compute_size(name: &[u8], value: &[u8]) -> Result<u32, HpackError> {
        let total = name.len() as u64 + value.len() as u64 + ENTRY_OVERHEAD as u64;
        u32::try_from(total).map_err(|_| HpackError::Overflow)
    }

    pub fn name(&self) -> &[u8] {
        &self.name
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn size(&self) -> u32 {
        self.size
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn size_includes_fixed_overhead() {
        let entry = HeaderEntry::new(b"a".to_vec(), b"bc".to_vec()).unwrap();
        assert_eq!(entry.size(), 1 + 2 + ENTRY_OVERHEAD);
    }

    #[test]
    fn empty_name_and_value_still_carry_overhead() {
        let entry = HeaderEntry::new(Vec::new(), Vec::new()).unwrap();
        assert_eq!(entry.size(), ENTRY_OVERHEAD);
    }
}
