/// Alias kept for call-site readability; encode and decode failures share
/// one flat taxonomy (see [`crate::error::HpackError`]).
pub type DecoderError = crate::error::HpackError;
