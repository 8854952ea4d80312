//! Content-addressed object types and operations
//!
//! jot stores all recorded content as objects identified by SHA-1 hashes.
//! There are two types:
//!
//! - **Blob**: a saved copy of one file's contents (raw bytes)
//! - **Commit**: a snapshot with metadata (message, timestamp, parent, and a
//!   flat filename-to-blob tree)
//!
//! All objects implement serialization/deserialization for the framed object
//! format: `<type> <size>\0<content>`

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;
