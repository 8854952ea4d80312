//! Index (staging area)
//!
//! The index is the staging area that collects the mutations recorded by the
//! next commit. It is two-sided: one map of files staged for addition and one
//! map of files staged for removal, each holding a filename and a blob ID.
//!
//! ## Lifecycle
//!
//! Each command invocation rehydrates the index from disk, applies its
//! changes in memory, and writes the whole file back. Reads take a shared
//! lock, writes take an exclusive lock, and the trailing checksum is
//! verified on every load.

use crate::artifacts::index::checksum::Checksum;
use crate::artifacts::index::index_entry::{ENTRY_BLOCK, ENTRY_MIN_SIZE, IndexEntry};
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::HEADER_SIZE;
use crate::artifacts::objects::object::{Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use bytes::{Buf, Bytes};
use std::collections::BTreeMap;
use std::ops::DerefMut;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    path: Box<Path>,
    /// Files staged for addition: filename to the blob saved for it
    additions: BTreeMap<String, ObjectId>,
    /// Files staged for removal: filename to the blob tracked by HEAD
    removals: BTreeMap<String, ObjectId>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            additions: BTreeMap::new(),
            removals: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn additions(&self) -> &BTreeMap<String, ObjectId> {
        &self.additions
    }

    pub fn removals(&self) -> &BTreeMap<String, ObjectId> {
        &self.removals
    }

    pub fn stage_addition(&mut self, file_name: &str, oid: ObjectId) {
        self.additions.insert(file_name.to_string(), oid);
    }

    pub fn stage_removal(&mut self, file_name: &str, oid: ObjectId) {
        self.removals.insert(file_name.to_string(), oid);
    }

    /// Drop a file from one side of the staging area, leaving the other side
    /// untouched.
    pub fn unstage(&mut self, file_name: &str, from_addition: bool) {
        if from_addition {
            self.additions.remove(file_name);
        } else {
            self.removals.remove(file_name);
        }
    }

    /// Whether any file, under any name, is staged for addition with the
    /// given blob ID
    pub fn addition_contains_hash(&self, oid: &ObjectId) -> bool {
        self.additions.values().any(|staged| staged == oid)
    }

    /// Whether any file, under any name, is staged for removal with the given
    /// blob ID
    pub fn removal_contains_hash(&self, oid: &ObjectId) -> bool {
        self.removals.values().any(|staged| staged == oid)
    }

    pub fn clear(&mut self) {
        self.additions.clear();
        self.removals.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.removals.is_empty()
    }

    /// Load the staging area from disk, replacing the in-memory state.
    ///
    /// A missing index file is created empty; a zero-length file means an
    /// empty staging area.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        if !self.path().exists() {
            self.clear();
            // create the index file
            std::fs::File::create(self.path())?;
        }

        let mut index_file = std::fs::OpenOptions::new().read(true).open(self.path())?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        self.clear();

        // if the index file is empty, return early
        if lock.deref_mut().metadata()?.len() == 0 {
            return Ok(());
        }

        let mut reader = Checksum::new(lock);
        let (additions_count, removals_count) = self.parse_header(&mut reader)?;
        self.parse_entries(additions_count, removals_count, &mut reader)?;

        reader.verify()
    }

    fn parse_header(&self, reader: &mut Checksum) -> anyhow::Result<(u32, u32)> {
        let header_bytes = reader.read(HEADER_SIZE)?;
        let header = IndexHeader::deserialize(header_bytes.reader())?;
        header.validate()?;

        Ok((header.additions_count, header.removals_count))
    }

    fn parse_entries(
        &mut self,
        additions_count: u32,
        removals_count: u32,
        reader: &mut Checksum,
    ) -> anyhow::Result<()> {
        for _ in 0..additions_count {
            let entry = Self::parse_entry(reader)?;
            self.additions.insert(entry.name, entry.oid);
        }

        for _ in 0..removals_count {
            let entry = Self::parse_entry(reader)?;
            self.removals.insert(entry.name, entry.oid);
        }

        Ok(())
    }

    fn parse_entry(reader: &mut Checksum) -> anyhow::Result<IndexEntry> {
        let entry_bytes = reader.read(ENTRY_MIN_SIZE)?;
        let mut entry_bytes = entry_bytes.to_vec();

        while entry_bytes[entry_bytes.len() - 1] != 0 {
            entry_bytes = [entry_bytes, reader.read(ENTRY_BLOCK)?.to_vec()].concat();
        }

        IndexEntry::deserialize(Bytes::from(entry_bytes).reader())
    }

    /// Persist the staging area, replacing the index file contents.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path())?;
        let lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;

        let mut writer = Checksum::new(lock);

        let header =
            IndexHeader::for_counts(self.additions.len() as u32, self.removals.len() as u32);
        writer.write(&header.serialize()?)?;

        for (file_name, oid) in self.additions.iter().chain(self.removals.iter()) {
            let entry = IndexEntry::new(file_name.clone(), oid.clone());
            writer.write(&entry.serialize()?)?;
        }

        writer.write_checksum()?;

        Ok(())
    }
}
