//! Repository layer.
//!
//! Each repository is a zero-sized struct providing CRUD methods that accept
//! `&redb::Database` as the first argument.

pub mod article_repo;

pub use article_repo::ArticleRepo;
