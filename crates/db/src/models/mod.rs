//! Persistent entity structs and their on-disk record forms.

pub mod article;

pub use article::Article;
