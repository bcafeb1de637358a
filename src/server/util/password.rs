//! Manager password hashing.
//!
//! Stored hashes have the form `<salt hex>$<digest hex>` where the digest is
//! `SHA-256(salt hex || password)` and the salt is 16 random bytes.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Creates and verifies stored password hashes.
pub trait PasswordHasher: Send + Sync {
    /// Hashes `password` with a fresh random salt.
    fn hash(&self, password: &str) -> String;

    /// Returns whether `password` matches `stored`. Malformed stored values never match.
    fn verify(&self, password: &str, stored: &str) -> bool;
}

/// Salted SHA-256 hasher with constant-time digest comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256PasswordHasher;

impl Sha256PasswordHasher {
    fn digest(salt: &str, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(password.as_bytes());
        to_hex(&hasher.finalize())
    }
}

impl PasswordHasher for Sha256PasswordHasher {
    fn hash(&self, password: &str) -> String {
        let salt = to_hex(&rand::random::<[u8; 16]>());
        let digest = Self::digest(&salt, password);
        format!("{}${}", salt, digest)
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        let Some((salt, expected)) = stored.split_once('$') else {
            return false;
        };
        if salt.is_empty() || expected.is_empty() {
            return false;
        }

        let actual = Self::digest(salt, password);
        actual.as_bytes().ct_eq(expected.as_bytes()).into()
    }
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
