use crate::areas::database::Database;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::JotError;
use std::path::Path;

/// The commit graph: every commit ever created, addressed by hash.
///
/// Commits live in their own content-addressed store, separate from blobs,
/// so commit references can never resolve to file content. Each commit names
/// at most one parent, which makes the graph a tree rooted at the initial
/// commit; branch deletion never removes commits from it.
#[derive(Debug)]
pub struct CommitGraph {
    database: Database,
}

impl CommitGraph {
    pub fn new(path: Box<Path>) -> Self {
        CommitGraph {
            database: Database::new(path),
        }
    }

    pub fn commits_path(&self) -> &Path {
        self.database.objects_path()
    }

    /// Insert a commit and return its ID. Inserting an identical commit
    /// again is a no-op that resolves to the same ID.
    pub fn insert(&self, commit: &Commit) -> anyhow::Result<ObjectId> {
        let oid = commit.object_id()?;
        self.database.store(commit.clone())?;

        Ok(oid)
    }

    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.database.contains(oid)
    }

    pub fn get(&self, oid: &ObjectId) -> anyhow::Result<Commit> {
        if !self.database.contains(oid) {
            return Err(JotError::CommitNotFound.into());
        }

        self.database
            .parse_object_as_commit(oid)?
            .ok_or_else(|| JotError::CommitNotFound.into())
    }

    /// Resolve a full or abbreviated commit reference to a stored commit ID.
    ///
    /// A 40-character reference must match exactly. A shorter reference is
    /// treated as a hash prefix; when several commits share the prefix, the
    /// first match wins.
    pub fn resolve_reference(&self, reference: &str) -> anyhow::Result<ObjectId> {
        if reference.len() == OBJECT_ID_LENGTH {
            let oid = ObjectId::try_parse(reference.to_string())
                .map_err(|_| JotError::CommitNotFound)?;

            if !self.contains(&oid) {
                return Err(JotError::CommitNotFound.into());
            }
            return Ok(oid);
        }

        if reference.len() > OBJECT_ID_LENGTH {
            return Err(JotError::CommitNotFound.into());
        }

        self.database
            .find_objects_by_prefix(reference)?
            .into_iter()
            .next()
            .ok_or_else(|| JotError::CommitNotFound.into())
    }

    /// Walk the first-parent chain from `start` back to the root commit.
    pub fn ancestry(&self, start: ObjectId) -> Ancestry<'_> {
        Ancestry {
            graph: self,
            next: Some(start),
        }
    }

    /// Load every commit in the graph, in no particular order.
    pub fn all(&self) -> anyhow::Result<Vec<(ObjectId, Commit)>> {
        self.database
            .list_objects()?
            .into_iter()
            .map(|oid| {
                let commit = self.get(&oid)?;
                Ok((oid, commit))
            })
            .collect()
    }
}

/// Iterator over a commit's ancestor chain, starting at the commit itself
/// and ending at the root commit.
pub struct Ancestry<'g> {
    graph: &'g CommitGraph,
    next: Option<ObjectId>,
}

impl Iterator for Ancestry<'_> {
    type Item = anyhow::Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = self.next.take()?;

        match self.graph.get(&oid) {
            Ok(commit) => {
                self.next = commit.parent().cloned();
                Some(Ok((oid, commit)))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
