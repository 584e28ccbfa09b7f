//! Article entity and its on-disk record encoding.

use mdnote_core::codec::StoredBody;
use mdnote_core::ArticleId;
use serde::{Deserialize, Serialize};

/// A fully decoded article, as seen by everything above the store.
///
/// `body` is always plain Markdown text here; the storage-side compression
/// tag never escapes the repository layer.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    /// Unique, monotonically allocated, immutable once created.
    pub id: ArticleId,
    /// Salted SHA-512 hex digest of the edit password; empty means no
    /// password was ever set and the article can never be edited.
    pub password_digest: String,
    /// Per-article random salt, fixed at creation for the article's lifetime.
    pub salt: String,
    /// The Markdown body, decoded.
    pub body: String,
    /// Starts at 0, +1 per successful edit. Doubles as the HTTP validator.
    pub revision: u64,
}

/// On-disk record layout, bincode-encoded under the decimal ID key.
///
/// The ID itself is not stored; `get` populates it from the lookup key. The
/// encoding is fixed and versionless — there is no migration path.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ArticleRecord {
    pub password_digest: String,
    pub salt: String,
    pub body: StoredBody,
    pub revision: u64,
}

impl ArticleRecord {
    pub(crate) fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    pub(crate) fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_round_trips_through_bincode() {
        let record = ArticleRecord {
            password_digest: "abc123".into(),
            salt: "salt".into(),
            body: StoredBody::Raw(b"# Hello".to_vec()),
            revision: 3,
        };
        let bytes = record.to_bytes().unwrap();
        let back = ArticleRecord::from_bytes(&bytes).unwrap();
        assert_eq!(back.password_digest, record.password_digest);
        assert_eq!(back.salt, record.salt);
        assert_eq!(back.body, record.body);
        assert_eq!(back.revision, record.revision);
    }
}
