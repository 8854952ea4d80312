//! jot command implementations
//!
//! Each user-facing command lives in its own module as an `impl Repository`
//! block, so a command file reads top to bottom as a single operation:
//!
//! - `init`: Create an empty repository with its initial commit
//! - `add`: Stage a file for the next commit
//! - `commit`: Record the staged snapshot as a new commit
//! - `rm`: Unstage a file or stage it for removal
//! - `checkout`: Restore files or switch branches
//! - `branch`: Create and delete branch pointers
//! - `reset`: Move the current branch to another commit
//! - `log`: Walk the current history, or all commits ever made
//! - `find`: Look up commit ids by message
//! - `status`: Report branches and staged changes

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod find;
pub mod init;
pub mod log;
pub mod reset;
pub mod rm;
pub mod status;
