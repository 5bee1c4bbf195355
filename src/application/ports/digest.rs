// src/application/ports/digest.rs

/// Fixed-length hexadecimal digest over arbitrary bytes. Slug generation
/// truncates the result, so implementations must return at least 8 hex chars.
pub trait ContentDigest: Send + Sync {
    fn hex_digest(&self, input: &[u8]) -> String;
}
