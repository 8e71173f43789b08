//! # relic-core
//!
//! Core library for relic - a minimal content-addressable version control
//! store.
//!
//! This crate provides the object store, the staging index and the commit
//! chain backing the `relic` command line tool. Content is addressed by the
//! SHA-1 digest of its bytes; commits are themselves content-addressed
//! objects chained backwards through parent identifiers.

pub mod error;
pub mod index;
pub mod models;
pub mod repo;
pub mod store;

pub use error::{Error, Result};
pub use index::Index;
pub use models::{Commit, ObjectId};
pub use repo::{History, Repository};
pub use store::ObjectStore;
