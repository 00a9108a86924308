// src/auth/password.rs

use anyhow::{anyhow, Result};
use bcrypt::{hash, verify, BcryptError};

// Matches the cost the stored hashes were created with.
const HASH_COST: u32 = 10;

pub fn hash_password(password: &str) -> Result<String> {
    hash(password, HASH_COST).map_err(|e: BcryptError| anyhow!("Failed to hash password: {}", e))
}

pub fn verify_password(password: &str, hashed: &str) -> Result<bool> {
    verify(password, hashed).map_err(|e: BcryptError| anyhow!("Failed to verify password: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let hashed = hash_password("secret1").unwrap();
        assert_ne!(hashed, "secret1");
        assert!(verify_password("secret1", &hashed).unwrap());
        assert!(!verify_password("secret2", &hashed).unwrap());
    }
}
