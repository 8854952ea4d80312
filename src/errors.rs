//! Failure conditions with user-facing messages.
//!
//! Every variant's display string is part of the command-line contract:
//! commands print these verbatim on stderr and exit non-zero. Internal
//! failures (I/O, corrupt files) are reported through `anyhow` context
//! chains instead and never use these variants.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JotError {
    // Malformed or misplaced invocations
    #[error("A jot version-control system already exists in the current directory.")]
    RepositoryExists,
    #[error("Not in an initialized jot directory.")]
    RepositoryMissing,
    #[error("Incorrect operands.")]
    IncorrectOperands,

    // Well-formed requests that do not apply to the current state
    #[error("Please enter a commit message.")]
    EmptyCommitMessage,
    #[error("No changes added to the commit.")]
    NothingStaged,
    /// `rm` on a file that is neither staged for addition nor tracked.
    #[error("No reason to remove the file.")]
    NothingToRemove,
    #[error("A branch with that name already exists.")]
    BranchAlreadyExists,
    #[error("Cannot remove the current branch.")]
    RemoveCurrentBranch,
    #[error("No need to checkout the current branch.")]
    CheckoutCurrentBranch,

    // Lookups that found nothing
    /// `add` target absent from the working directory.
    #[error("File does not exist.")]
    FileNotFound,
    /// Checkout target file absent from the selected commit's tree.
    #[error("File does not exist in that commit.")]
    FileNotInCommit,
    #[error("No commit with that id exists.")]
    CommitNotFound,
    /// `checkout` target branch absent from the branch table.
    #[error("No such branch exists.")]
    BranchNotFound,
    /// `rm-branch` target absent from the branch table.
    #[error("A branch with that name does not exist.")]
    BranchMissing,
    #[error("Found no commit with that message.")]
    NoMatchingCommit,

    // Working-directory conflicts
    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedFileInTheWay,
}
