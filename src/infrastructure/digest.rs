use crate::application::ports::digest::ContentDigest;
use sha2::{Digest, Sha256};

#[derive(Default, Clone)]
pub struct Sha256ContentDigest;

impl ContentDigest for Sha256ContentDigest {
    fn hex_digest(&self, input: &[u8]) -> String {
        format!("{:x}", Sha256::digest(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_64_lowercase_hex_chars() {
        let digest = Sha256ContentDigest.hex_digest(b"hello");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn digest_is_deterministic() {
        let a = Sha256ContentDigest.hex_digest(b"title1700000000000");
        let b = Sha256ContentDigest.hex_digest(b"title1700000000000");
        assert_eq!(a, b);
    }
}
