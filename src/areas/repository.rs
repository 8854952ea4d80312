use crate::areas::database::Database;
use crate::areas::graph::CommitGraph;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::{REPOSITORY_DIR, Workspace};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// Facade over the working directory and the `.jot` state directory.
///
/// Every command operates through a `Repository`: the workspace for plain
/// files, the database and commit graph for stored objects, the refs area for
/// branch pointers and the staging index for the next commit.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    database: Database,
    graph: CommitGraph,
    refs: Refs,
    index: RefCell<Index>,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path)
            .canonicalize()
            .with_context(|| format!("Failed to resolve repository path {path}"))?;
        let state_path = path.join(REPOSITORY_DIR);

        let workspace = Workspace::new(path.clone().into_boxed_path());
        let database = Database::new(state_path.join("blobs").into_boxed_path());
        let graph = CommitGraph::new(state_path.join("commits").into_boxed_path());
        let refs = Refs::new(state_path.clone().into_boxed_path());
        let index = Index::new(state_path.join("index").into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            workspace,
            database,
            graph,
            refs,
            index: RefCell::new(index),
        })
    }

    /// Whether `path` already hosts a repository state directory.
    pub fn is_initialized(path: &str) -> bool {
        Path::new(path).join(REPOSITORY_DIR).is_dir()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repository_path(&self) -> PathBuf {
        self.path.join(REPOSITORY_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn graph(&self) -> &CommitGraph {
        &self.graph
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    /// The commit the current branch points at, together with its id.
    pub fn head_commit(&self) -> anyhow::Result<(ObjectId, Commit)> {
        let branch = self.refs.current_branch()?;
        let commit_id = self.refs.read_branch(&branch)?.with_context(|| {
            format!("branch {branch} does not reference a commit")
        })?;
        let commit = self.graph.get(&commit_id)?;

        Ok((commit_id, commit))
    }
}
