//! Branch references and HEAD
//!
//! This module manages the branch table: human-readable names pointing to
//! commits. References come in two shapes:
//! - Branch files: `refs/heads/<name>`, each containing a commit SHA-1
//! - HEAD: a symbolic reference naming the current branch
//!
//! ## HEAD
//!
//! HEAD always names a branch, never a bare commit; checking out or
//! resetting to a commit moves the current branch instead of detaching.
//!
//! ## File Format
//!
//! References are stored as text files containing either:
//! - A 40-character SHA-1 hash (branch file)
//! - `ref: refs/heads/<name>` (HEAD)
//!
//! Branch names may contain `/`, so branch files can sit in nested
//! directories under `refs/heads`; deleting the last branch in such a
//! directory prunes the directory as well.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::JotError;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;
use walkdir::WalkDir;

/// Regex pattern for parsing the symbolic HEAD reference
const SYMREF_REGEX: &str = r"^ref: refs/heads/(.+)$";

/// Name of the branch `init` creates and points HEAD at
pub const DEFAULT_BRANCH: &str = "master";

/// Branch table manager
///
/// Handles reading and writing branch references and HEAD.
/// Provides safe concurrent access through file locking.
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository state directory (`.jot`)
    path: Box<Path>,
}

impl Refs {
    /// Read the branch HEAD currently names
    pub fn current_branch(&self) -> anyhow::Result<BranchName> {
        let head_path = self.head_path();
        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read HEAD at {:?}", head_path))?;
        let content = content.trim();

        let symref_match = regex::Regex::new(SYMREF_REGEX)?
            .captures(content)
            .with_context(|| format!("HEAD does not name a branch: {content}"))?;

        BranchName::try_parse(symref_match[1].to_string())
    }

    /// Point HEAD at the given branch
    pub fn set_head(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        self.update_ref_file(self.head_path(), format!("ref: refs/heads/{}", branch_name))
    }

    /// Read the commit ID a branch points at, or None if the branch is absent
    pub fn read_branch(&self, branch_name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let branch_path = self.branch_path(branch_name);

        if !branch_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&branch_path)
            .with_context(|| format!("failed to read ref file at {:?}", branch_path))?;

        Ok(Some(ObjectId::try_parse(content.trim().to_string())?))
    }

    pub fn branch_exists(&self, branch_name: &BranchName) -> bool {
        self.branch_path(branch_name).exists()
    }

    /// Move an existing branch to point at the given commit
    pub fn advance_branch(&self, branch_name: &BranchName, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_ref_file(self.branch_path(branch_name), oid.as_ref().into())
    }

    pub fn create_branch(&self, branch_name: &BranchName, source_oid: &ObjectId) -> anyhow::Result<()> {
        // check whether another branch with the same name already exists
        if self.branch_exists(branch_name) {
            return Err(JotError::BranchAlreadyExists.into());
        }

        self.update_ref_file(self.branch_path(branch_name), source_oid.as_ref().into())
    }

    pub fn delete_branch(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        let branch_path = self.branch_path(branch_name);

        if !branch_path.exists() {
            return Err(JotError::BranchMissing.into());
        }

        std::fs::remove_file(&branch_path)
            .with_context(|| format!("failed to delete branch file at {:?}", branch_path))?;
        self.prune_branch_empty_parent_dirs(&branch_path)
    }

    /// List every branch name, sorted lexicographically
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();

        let mut branch_names = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                if entry.path().is_file() {
                    let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                    BranchName::try_parse(relative_path.to_string_lossy().to_string()).ok()
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();

        branch_names.sort();
        Ok(branch_names)
    }

    fn update_ref_file(&self, path: Box<Path>, raw_ref: String) -> anyhow::Result<()> {
        // create all the parent directories if they don't exist
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?)?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path.clone())
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(raw_ref.as_bytes())?;

        Ok(())
    }

    fn prune_branch_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.heads_path().as_ref()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent).with_context(|| {
                format!("failed to remove empty branch directory at {:?}", parent)
            })?;
            self.prune_branch_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join("HEAD").into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }

    fn branch_path(&self, branch_name: &BranchName) -> Box<Path> {
        self.heads_path().join(branch_name.as_ref()).into_boxed_path()
    }
}
