//! The 61 predefined header entries of RFC 7541 Appendix A, addressed by
//! 1-based indices 1..61. Shared process-wide, never mutated.

/// `(name, value)` pairs in RFC 7541 Appendix A order. Index `i` (0-based
/// here) corresponds to wire index `i + 1`.
pub const ENTRIES: [(&str, &str); 61] = [
    (":authority", ""),
    (":method", "GET"),
    (":method", "POST"),
    (":path", "/"),
    (":path", "/index.html"),
    (":scheme", "http"),
    (":scheme", "https"),
    (":status", "200"),
    (":status", "204"),
    (":status", "206"),
    (":status", "304"),
    (":status", "400"),
    (":status", "404"),
    (":status", "500"),
    ("accept-charset", ""),
    ("accept-encoding", "gzip, deflate"),
    ("accept-language", ""),
    ("accept-ranges", ""),
    ("accept", ""),
    ("access-control-allow-origin", ""),
    ("age", ""),
    ("allow", ""),
    ("authorization", ""),
    ("cache-control", ""),
    ("content-disposition", ""),
    ("content-encoding", ""),
    ("content-language", ""),
    ("content-length", ""),
    ("content-location", ""),
    ("content-range", ""),
    ("content-type", ""),
    ("cookie", ""),
    ("date", ""),
    ("etag", ""),
    ("expect", ""),
    ("expires", ""),
    ("from", ""),
    ("host", ""),
    ("if-match", ""),
    ("if-modified-since", ""),
    ("if-none-match", ""),
    ("if-range", ""),
    ("if-unmodified-since", ""),
    ("last-modified", ""),
    ("link", ""),
    ("location", ""),
    ("max-forwards", ""),
    ("proxy-authenticate", ""),
    ("proxy-authorization", ""),
    ("range", ""),
    ("referer", ""),
    ("refresh", ""),
    ("retry-after", ""),
    ("server", ""),
    ("set-cookie", ""),
    ("strict-transport-security", ""),
    ("transfer-encoding", ""),
    ("user-agent", ""),
    ("vary", ""),
    ("via", ""),
    ("www-authenticate", ""),
];

pub fn len() -> usize {
    ENTRIES.len()
}

/// Looks up a static entry by its 1-based wire index.
pub fn get(index: usize) -> Option<(&'static str, &'static str)> {
    index.checked_sub(1).and_then(|i| ENTRIES.get(i)).copied()
}

/// Finds the smallest 1-based index whose entry matches both name and
/// value, preferring the first such match per the table's fixed order.
pub fn find_index(name: &[u8], value: &[u8]) -> Option<usize> {
    ENTRIES.iter().position(|&(n, v)| n.as_bytes() == name && v.as_bytes() == value).map(|i| i + 1)
}

/// Finds the smallest 1-based index whose entry name matches, regardless
/// of value.
pub fn find_name_index(name: &[u8]) -> Option<usize> {
    ENTRIES.iter().position(|&(n, _)| n.as_bytes() == name).map(|i| i + 1)
}
