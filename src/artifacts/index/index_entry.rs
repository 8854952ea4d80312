//! Index entry representation
//!
//! Each entry in the index represents one staged file:
//! - File name
//! - Content hash (blob ID)
//!
//! Whether an entry belongs to the addition or removal section is determined
//! by its position in the file together with the header counts, not by the
//! entry itself.
//!
//! ## Entry Format
//!
//! The 20-byte binary blob ID, then the filename, then a null terminator,
//! padded with further null bytes to 8-byte alignment.

use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use derive_new::new;
use std::io::{BufRead, Write};

/// Block size for entry alignment (8 bytes)
pub const ENTRY_BLOCK: usize = 8;

/// Minimum size of an index entry in bytes
pub const ENTRY_MIN_SIZE: usize = 24; // 20-byte oid + 1-char name + terminator, padded

/// Index entry representing one staged file
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    /// File name relative to the repository root
    pub name: String,
    /// SHA-1 hash of the staged file content
    pub oid: ObjectId,
}

impl Packable for IndexEntry {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut entry_bytes = Vec::new();
        self.oid.write_h40_to(&mut entry_bytes)?;
        entry_bytes.write_all(self.name.as_bytes())?;

        // Ensure the entry bytes are padded to ENTRY_BLOCK size with null bytes
        entry_bytes.push(0); // There must be at least one null byte at the end
        while entry_bytes.len() % ENTRY_BLOCK != 0 {
            entry_bytes.push(0);
        }

        Ok(Bytes::from(entry_bytes))
    }
}

impl Unpackable for IndexEntry {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        let oid = ObjectId::read_h40_from(&mut reader)?;

        let mut name_bytes = Vec::new();
        reader.read_until(0, &mut name_bytes)?;
        if name_bytes.pop() != Some(0) {
            return Err(anyhow::anyhow!("Missing null terminator in entry name"));
        }
        let name = String::from_utf8(name_bytes)
            .map_err(|_| anyhow::anyhow!("Invalid UTF-8 in entry name"))?;

        Ok(IndexEntry { name, oid })
    }
}
