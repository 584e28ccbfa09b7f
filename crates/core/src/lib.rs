//! Domain logic for the mdnote article service.
//!
//! This crate has zero internal dependencies so it can be used by both the
//! persistence layer and the HTTP server (and any future CLI tooling).

pub mod codec;
pub mod credential;
pub mod title;

/// Article identifiers are unsigned 64-bit sequence values allocated by the
/// store, starting at 1.
pub type ArticleId = u64;
