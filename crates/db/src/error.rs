//! Store error taxonomy.
//!
//! Callers must be able to tell "this article doesn't exist" apart from "you
//! can't edit this article" apart from "the backend broke", so the variants
//! here map one-to-one onto those outcomes.

use mdnote_core::codec::CodecError;
use mdnote_core::ArticleId;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No record exists at the given ID. Read-side only.
    #[error("article {id} not found")]
    NotFound { id: ArticleId },

    /// Credential mismatch or missing edit password. Always distinct from
    /// [`StoreError::NotFound`].
    #[error("wrong or missing edit password")]
    Unauthorized,

    /// The stored record failed to decode or decompress — a storage
    /// integrity fault, never swallowed.
    #[error("stored article body is corrupt: {0}")]
    Codec(#[from] CodecError),

    /// The record bytes could not be (de)serialized.
    #[error("article record encoding failed: {0}")]
    Encoding(#[from] bincode::Error),

    /// Any failure inside the backing store itself.
    #[error("storage backend error: {0}")]
    Backend(#[from] redb::Error),
}

// redb surfaces a distinct error type per operation stage; fold them all
// into `Backend` so repository code can use `?` throughout.
impl From<redb::DatabaseError> for StoreError {
    fn from(err: redb::DatabaseError) -> Self {
        Self::Backend(err.into())
    }
}

impl From<redb::TransactionError> for StoreError {
    fn from(err: redb::TransactionError) -> Self {
        Self::Backend(err.into())
    }
}

impl From<redb::TableError> for StoreError {
    fn from(err: redb::TableError) -> Self {
        Self::Backend(err.into())
    }
}

impl From<redb::StorageError> for StoreError {
    fn from(err: redb::StorageError) -> Self {
        Self::Backend(err.into())
    }
}

impl From<redb::CommitError> for StoreError {
    fn from(err: redb::CommitError) -> Self {
        Self::Backend(err.into())
    }
}
