//! Content hashing via SHA-256.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of a text's UTF-8 bytes as lower-case hex.
///
/// This is the wire contract for `Snapshot::hash`. It is consulted only to
/// answer "is content byte-identical", never parsed or compared partially.
pub fn content_hash(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    format!("{digest:x}")
}
