//! Staging area file format
//!
//! The index persists the staging area between invocations. It records two
//! sections of entries: files staged for addition and files staged for
//! removal, each mapping a filename to a blob ID.
//!
//! ## File Format (Version 1)
//!
//! ```text
//! Header (16 bytes):
//!   - Signature: "STAG" (4 bytes)
//!   - Version: 1 (4 bytes)
//!   - Addition entry count (4 bytes)
//!   - Removal entry count (4 bytes)
//!
//! Entries (variable length):
//!   - Addition entries, then removal entries
//!   - Each entry padded to 8-byte alignment
//!   - Contains the blob ID and the null-terminated filename
//!
//! Checksum (20 bytes):
//!   - SHA-1 hash of all preceding bytes
//! ```
//!
//! A zero-length file is also valid and means an empty staging area; `init`
//! creates the index that way.

pub mod checksum;
pub mod index_entry;
pub mod index_header;

/// Size of SHA-1 checksum in bytes
pub const CHECKSUM_SIZE: usize = 20; // SHA1 produces a 20-byte hash

/// Size of index header in bytes
pub const HEADER_SIZE: usize = 16; // 4 bytes for marker, 4 for version, 4 per entry count

/// Magic signature identifying index files
pub const SIGNATURE: &str = "STAG"; // Signature for the index file

/// Index file format version
pub const VERSION: u32 = 1; // Version of the index file format
