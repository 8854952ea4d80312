//! Core repository areas
//!
//! This module contains the storage areas a jot repository is built from:
//!
//! - `database`: Content-addressed object store for blobs and commits
//! - `graph`: Commit history, addressed by commit id
//! - `index`: Two-sided staging area for the next commit
//! - `refs`: Branch pointers and the HEAD reference
//! - `repository`: High-level facade coordinating the areas
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod graph;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
