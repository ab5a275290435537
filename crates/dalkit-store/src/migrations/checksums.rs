//! Checksums of migration SQL, used to detect edited migrations

use sha2::{Digest, Sha256};

/// Compute the hex SHA-256 of `content`
pub fn compute_checksum(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
