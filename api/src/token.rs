//! Opaque tokens for public links.
//!
//! A token is the sole access credential for a published page, so it has
//! to come from the OS entropy source; nothing sequential or derived from
//! timestamps.

use rand_core::{OsRng, RngCore};

const TOKEN_BYTES: usize = 16;

/// Fresh 32-character lowercase hex token.
pub fn random_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_32_hex_chars() {
        let token = random_token();
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(token, token.to_lowercase());
    }

    #[test]
    fn tokens_do_not_repeat() {
        assert_ne!(random_token(), random_token());
    }
}
