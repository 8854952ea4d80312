//! # jot
//!
//! A minimal local version-control system. Snapshots of a flat working
//! directory are recorded as content-addressed commits, mutations are
//! collected in a two-sided staging area, and named branch pointers plus a
//! symbolic `HEAD` select the current line of history.
//!
//! The crate is split into three layers:
//!
//! - [`artifacts`]: the value types that get serialized (blobs, commits,
//!   staging entries, branch names) and the checkout migration planner
//! - [`areas`]: the on-disk storage areas (`.jot/blobs`, `.jot/commits`,
//!   `.jot/refs`, `.jot/index`, the working directory) and the
//!   [`areas::repository::Repository`] facade that ties them together
//! - [`commands`]: the user-facing operations exposed by the CLI

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
