//! Repository for the `articles` table.
//!
//! Keys are the decimal string form of the numeric ID — the only index. IDs
//! come from an atomic sequence counter in the `meta` table, bumped inside
//! the same write transaction as the insert, so two concurrent creates can
//! never observe the same value.

use redb::{Database, ReadableTable, ReadableTableMetadata, TableDefinition};

use mdnote_core::{codec, credential, ArticleId};

use crate::error::StoreError;
use crate::models::article::{Article, ArticleRecord};

/// One record per article, keyed by decimal ID.
const ARTICLES: TableDefinition<&str, &[u8]> = TableDefinition::new("articles");

/// Store-wide counters. Currently only the article ID sequence.
const META: TableDefinition<&str, u64> = TableDefinition::new("meta");

const NEXT_ID_KEY: &str = "articles.next_id";

/// Create both tables if this is a fresh database file.
pub(crate) fn ensure_tables(db: &Database) -> Result<(), StoreError> {
    let txn = db.begin_write()?;
    txn.open_table(ARTICLES)?;
    txn.open_table(META)?;
    txn.commit()?;
    Ok(())
}

/// Provides the article store operations: create, get, update, count.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Create a new article and return its freshly allocated ID.
    ///
    /// The salt is generated here regardless of whether a password was
    /// supplied; the digest is empty for password-less articles, which makes
    /// them permanently immutable. The transaction commits the counter bump
    /// and the record together, so the caller never observes partial state.
    /// A failed create after allocation leaves a gap in the ID sequence,
    /// which is accepted.
    pub fn create(db: &Database, body: &str, password: &str) -> Result<ArticleId, StoreError> {
        let salt = credential::new_salt();
        let password_digest = credential::digest(password, &salt);
        let record = ArticleRecord {
            password_digest,
            salt,
            body: codec::encode(body)?,
            revision: 0,
        };
        let bytes = record.to_bytes()?;

        let txn = db.begin_write()?;
        let id = {
            let mut meta = txn.open_table(META)?;
            let next = meta.get(NEXT_ID_KEY)?.map_or(0, |g| g.value()) + 1;
            meta.insert(NEXT_ID_KEY, next)?;
            next
        };
        {
            let mut articles = txn.open_table(ARTICLES)?;
            articles.insert(id.to_string().as_str(), bytes.as_slice())?;
        }
        txn.commit()?;

        tracing::debug!(article_id = id, "Article created");
        Ok(id)
    }

    /// Fetch an article by ID with the body already decoded.
    ///
    /// Pure read: never mutates the revision or the stored encoding. A
    /// missing key is `NotFound`; a record that fails to decode or
    /// decompress is a storage-integrity error.
    pub fn get(db: &Database, id: ArticleId) -> Result<Article, StoreError> {
        let txn = db.begin_read()?;
        let articles = txn.open_table(ARTICLES)?;
        let guard = articles
            .get(id.to_string().as_str())?
            .ok_or(StoreError::NotFound { id })?;
        let record = ArticleRecord::from_bytes(guard.value())?;
        let body = codec::decode(&record.body)?;
        Ok(Article {
            id,
            password_digest: record.password_digest,
            salt: record.salt,
            body,
            revision: record.revision,
        })
    }

    /// Replace an article's body after verifying the edit password, and
    /// return the new revision.
    ///
    /// Read-modify-write with no per-article lock: two racing edits to the
    /// same ID may both succeed and the later commit wins. That last-write-
    /// wins policy is deliberate; do not add locking here.
    pub fn update(
        db: &Database,
        id: ArticleId,
        password: &str,
        new_body: &str,
    ) -> Result<u64, StoreError> {
        let current = Self::get(db, id)?;
        if !credential::verify(password, &current.salt, &current.password_digest) {
            return Err(StoreError::Unauthorized);
        }

        let revision = current.revision + 1;
        let record = ArticleRecord {
            password_digest: current.password_digest,
            salt: current.salt,
            body: codec::encode(new_body)?,
            revision,
        };
        let bytes = record.to_bytes()?;

        let txn = db.begin_write()?;
        {
            let mut articles = txn.open_table(ARTICLES)?;
            articles.insert(id.to_string().as_str(), bytes.as_slice())?;
        }
        txn.commit()?;

        tracing::debug!(article_id = id, revision, "Article updated");
        Ok(revision)
    }

    /// Number of stored articles. Read-only; used by the index page.
    pub fn count(db: &Database) -> Result<u64, StoreError> {
        let txn = db.begin_read()?;
        let articles = txn.open_table(ARTICLES)?;
        Ok(articles.len()?)
    }
}
