//! Commit object
//!
//! Commits represent snapshots of the working directory at specific points
//! in time. They contain:
//! - A commit message
//! - A creation timestamp
//! - The parent commit ID (absent only for the root commit)
//! - A flat tree mapping filenames to blob IDs
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! date <unix-seconds> <timezone>
//! parent <parent-sha>
//! blob <blob-sha> <filename>
//!
//! <commit message>
//! ```
//!
//! The `parent` line is omitted for the root commit and there is one `blob`
//! line per tracked file, ordered by filename so that serialization is
//! deterministic and equal snapshots hash identically.

use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

/// Message recorded for the commit every repository starts from.
pub const ROOT_COMMIT_MESSAGE: &str = "initial commit";

/// Commit object
///
/// A commit records the complete tracked state of the working directory as a
/// filename-to-blob mapping, plus the metadata needed to walk and display
/// history. Identity is the SHA-1 of the serialized form, so two commits with
/// the same message, timestamp, parent, and tree are the same commit.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Commit message
    message: String,
    /// Creation time, kept with its original UTC offset
    timestamp: chrono::DateTime<chrono::FixedOffset>,
    /// Parent commit ID (None only for the root commit)
    parent: Option<ObjectId>,
    /// Tracked files: filename to blob ID
    tree: BTreeMap<String, ObjectId>,
}

impl Commit {
    /// Create a new commit stamped with the current local time
    ///
    /// # Arguments
    ///
    /// * `message` - Commit message
    /// * `parent` - Parent commit ID
    /// * `tree` - Complete filename-to-blob mapping for the snapshot
    pub fn new(message: String, parent: Option<ObjectId>, tree: BTreeMap<String, ObjectId>) -> Self {
        Commit {
            message,
            timestamp: chrono::Local::now().fixed_offset(),
            parent,
            tree,
        }
    }

    /// Create a new commit with a specific timestamp
    pub fn new_with_timestamp(
        message: String,
        parent: Option<ObjectId>,
        tree: BTreeMap<String, ObjectId>,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> Self {
        Commit {
            message,
            timestamp,
            parent,
            tree,
        }
    }

    /// Create the root commit every repository history ends at
    ///
    /// The root commit is fully deterministic: fixed message, the Unix epoch
    /// as timestamp, no parent, and an empty tree. Every repository therefore
    /// shares the same root commit ID.
    pub fn root() -> Self {
        Commit {
            message: ROOT_COMMIT_MESSAGE.to_string(),
            timestamp: chrono::DateTime::UNIX_EPOCH.fixed_offset(),
            parent: None,
            tree: BTreeMap::new(),
        }
    }

    /// Get the full commit message
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    /// Get the tracked filename-to-blob mapping
    pub fn tree(&self) -> &BTreeMap<String, ObjectId> {
        &self.tree
    }

    /// Whether any tracked file, under any name, is saved with this blob ID
    pub fn tracks_hash(&self, oid: &ObjectId) -> bool {
        self.tree.values().any(|tracked| tracked == oid)
    }

    /// Format the timestamp in human-readable form
    ///
    /// # Returns
    ///
    /// String like "Thu Jan 01 00:00:00 1970 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.format("%a %b %d %H:%M:%S %Y %z").to_string()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut object_content = vec![];

        object_content.push(format!(
            "date {} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        ));
        if let Some(parent) = &self.parent {
            object_content.push(format!("parent {}", parent.as_ref()));
        }
        for (file_name, oid) in &self.tree {
            object_content.push(format!("blob {} {}", oid.as_ref(), file_name));
        }
        object_content.push(String::new());
        object_content.push(self.message.to_string());

        let object_content = object_content.join("\n");

        let mut content_bytes = Vec::new();
        content_bytes.write_all(object_content.as_bytes())?;

        let mut commit_bytes = Vec::new();
        let header = format!("{} {}\0", self.object_type().as_str(), content_bytes.len());
        commit_bytes.write_all(header.as_bytes())?;
        commit_bytes.write_all(&content_bytes)?;

        Ok(Bytes::from(commit_bytes))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader
            .bytes()
            .collect::<Result<Vec<u8>, std::io::Error>>()?;

        let content = String::from_utf8(content)?;
        let mut lines = content.lines();

        let date_line = lines
            .next()
            .context("Invalid commit object: missing date line")?;
        let date = date_line
            .strip_prefix("date ")
            .context("Invalid commit object: invalid date line")?;
        let timestamp = chrono::DateTime::parse_from_str(date, "%s %z")
            .context("Invalid commit object: invalid timestamp")?;

        let mut parent = None;
        let mut tree = BTreeMap::new();

        for line in lines.by_ref() {
            if line.is_empty() {
                break;
            }

            if let Some(parent_oid) = line.strip_prefix("parent ") {
                parent = Some(ObjectId::try_parse(parent_oid.to_string())?);
            } else if let Some(entry) = line.strip_prefix("blob ") {
                let (oid, file_name) = entry
                    .split_once(' ')
                    .context("Invalid commit object: invalid blob line")?;
                tree.insert(file_name.to_string(), ObjectId::try_parse(oid.to_string())?);
            } else {
                return Err(anyhow::anyhow!(
                    "Invalid commit object: unexpected line: {line}"
                ));
            }
        }

        let message = lines.collect::<Vec<&str>>().join("\n");
        Ok(Self::new_with_timestamp(message, parent, tree, timestamp))
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }
}
