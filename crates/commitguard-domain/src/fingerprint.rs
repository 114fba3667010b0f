use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a header finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - header line
pub fn fingerprint_for_header(check_id: &str, code: &str, header: &str) -> String {
    let canonical = [check_id, code, header].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
