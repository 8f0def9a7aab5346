//! Character-class predicates for header names and values (RFC 7541 §8.1.2,
//! RFC 7230 §3.2).

/// A header name must be nonempty lowercase `token` characters plus `:`
/// (for pseudo-headers). Uppercase letters are rejected outright: callers
/// are expected to lowercase names before encoding, per RFC 7541 §8.1.2.
pub fn is_valid_header_name(name: &[u8]) -> bool {
    if name.is_empty() {
        return false;
    }
    name.iter().all(|&b| {
        b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'-' | b'_' | b':')
    })
}

/// A header value may contain any octet except a control character, with
/// horizontal tab allowed as an exception.
pub fn is_valid_header_value(value: &[u8]) -> bool {
    value.iter().all(|&b| !is_control(b) || b == b'\t')
}

fn is_control(b: u8) -> bool {
    b < 0x20 || b == 0x7f
}
