//! Data structures and algorithms
//!
//! This module contains the core value types and algorithms:
//!
//! - `branch`: Branch name validation
//! - `checkout`: Working-directory migration between commits
//! - `core`: Shared utilities (pager wrapper, etc.)
//! - `index`: Index/staging area data structures
//! - `objects`: Content-addressed object types (blob, commit)

pub mod branch;
pub mod checkout;
pub mod core;
pub mod index;
pub mod objects;
