//! Salted SHA-512 digests gating article edits.
//!
//! Each article carries a random per-article salt generated once at creation.
//! An empty password digests to the empty string, which is the sentinel for
//! "no edit password configured" — such articles can never be edited, since
//! verification requires the stored digest to be non-empty.

use sha2::{Digest, Sha512};
use uuid::Uuid;

/// Compute the hex digest of `password` salted with `salt`.
///
/// Returns the empty string when `password` is empty; otherwise a 128-char
/// lowercase hex SHA-512 of the password/salt concatenation. Deterministic.
pub fn digest(password: &str, salt: &str) -> String {
    if password.is_empty() {
        return String::new();
    }
    let hash = Sha512::digest(format!("{password}{salt}").as_bytes());
    format!("{hash:x}")
}

/// Verify a supplied password against a stored salt and digest.
///
/// Both conditions must hold: the stored digest is non-empty (a password was
/// set at creation) and the re-derived digest matches it exactly.
pub fn verify(supplied: &str, salt: &str, stored_digest: &str) -> bool {
    !stored_digest.is_empty() && digest(supplied, salt) == stored_digest
}

/// Generate a fresh per-article salt.
///
/// Uses a random (v4) UUID, generated once at article creation and fixed for
/// the article's lifetime — even for password-less articles.
pub fn new_salt() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_deterministic() {
        let a = digest("secret", "salt-1");
        let b = digest("secret", "salt-1");
        assert_eq!(a, b);
        assert_eq!(a.len(), 128);
    }

    #[test]
    fn different_passwords_differ_under_same_salt() {
        assert_ne!(digest("secret", "salt-1"), digest("other", "salt-1"));
    }

    #[test]
    fn empty_password_digests_to_empty_string() {
        assert_eq!(digest("", ""), "");
        assert_eq!(digest("", "any-salt"), "");
    }

    #[test]
    fn verify_accepts_matching_password() {
        let salt = new_salt();
        let stored = digest("p1", &salt);
        assert!(verify("p1", &salt, &stored));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let salt = new_salt();
        let stored = digest("p1", &salt);
        assert!(!verify("p2", &salt, &stored));
    }

    #[test]
    fn empty_stored_digest_rejects_every_password() {
        // An article created without a password is permanently immutable,
        // including against an empty supplied password.
        assert!(!verify("", "salt", ""));
        assert!(!verify("anything", "salt", ""));
    }

    #[test]
    fn salts_are_unique() {
        assert_ne!(new_salt(), new_salt());
    }
}
