//! Storage abstraction and document index for Verso.
//!
//! This crate provides a [`Storage`] trait for abstracting document scanning from
//! the underlying backend, and a [`DocumentIndex`] that snapshots a scan into an
//! immutable lookup table. The index is built once at startup; refreshing
//! content means building a new index, never patching the old one.
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with `scan()`, `read()`, and `exists()` methods
//! - [`DocumentIndex`] for O(1) existence checks by URL path
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use verso_storage::DocumentIndex;
//! use verso_storage_fs::FsStorage;
//!
//! let storage = FsStorage::new(PathBuf::from("docs"));
//! let index = DocumentIndex::build(&storage)?;
//! assert!(index.contains("v1.0/nodes/boolean"));
//! ```

mod index;
#[cfg(feature = "mock")]
mod mock;
mod storage;

pub use index::DocumentIndex;
#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Document, Storage, StorageError, StorageErrorKind};
