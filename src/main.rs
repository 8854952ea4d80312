use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use jot::areas::repository::Repository;
use jot::artifacts::core::PagerWriter;
use jot::errors::JotError;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "jot",
    version = "0.1.0",
    about = "A minimal local version-control system",
    long_about = "jot keeps content-addressed snapshots of the files in the current directory. \
    It supports staging, committing, branching and restoring earlier snapshots, \
    all without any notion of a remote.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory, \
        with a single initial commit and a master branch pointing at it."
    )]
    Init,
    #[command(
        name = "add",
        about = "Stage a file for the next commit",
        long_about = "This command stages the working copy of a file for addition. \
        Adding a file that matches the version in the current commit unstages it instead."
    )]
    Add {
        #[arg(index = 1, help = "The file to stage")]
        file: String,
    },
    #[command(
        name = "commit",
        about = "Record the staged snapshot as a new commit",
        long_about = "This command creates a new commit from the staged additions and removals, \
        with the current commit as its parent."
    )]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "rm",
        about = "Unstage a file, or stage it for removal",
        long_about = "This command unstages a file if it is staged for addition. \
        If the current commit tracks the file, it is staged for removal and deleted \
        from the working directory."
    )]
    Rm {
        #[arg(index = 1, help = "The file to remove")]
        file: String,
    },
    #[command(
        name = "log",
        about = "Show the history of the current branch",
        long_about = "This command walks the chain of commits from the current head \
        back to the initial commit, printing each one."
    )]
    Log,
    #[command(
        name = "global-log",
        about = "Show every commit ever made",
        long_about = "This command prints every commit stored in the repository, \
        across all branches, in no particular order."
    )]
    GlobalLog,
    #[command(
        name = "find",
        about = "Print the ids of commits with the given message",
        long_about = "This command prints the id of every commit whose message matches \
        the given message exactly, one per line."
    )]
    Find {
        #[arg(index = 1, help = "The commit message to search for")]
        message: String,
    },
    #[command(
        name = "status",
        about = "Show branches and staged changes",
        long_about = "This command displays the branches in the repository, marking the \
        current one, followed by the files staged for addition and for removal."
    )]
    Status,
    #[command(
        name = "checkout",
        about = "Restore files or switch branches",
        long_about = "This command has three forms: `checkout -- <file>` restores the file \
        from the head commit, `checkout <commit> -- <file>` restores it from the given \
        commit, and `checkout <branch>` switches to the branch, replacing the working \
        directory with its snapshot."
    )]
    Checkout {
        #[arg(index = 1, help = "The branch to switch to, or the commit to restore from")]
        target: Option<String>,
        #[arg(index = 2, last = true, help = "The file to restore")]
        file: Option<String>,
    },
    #[command(
        name = "branch",
        about = "Create a new branch at the current commit",
        long_about = "This command creates a new branch pointing at the current commit. \
        It does not switch to the new branch."
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: String,
    },
    #[command(
        name = "rm-branch",
        about = "Delete a branch pointer",
        long_about = "This command deletes the pointer to the given branch. \
        Commits reachable from it are left in place."
    )]
    RmBranch {
        #[arg(index = 1, help = "The name of the branch to delete")]
        name: String,
    },
    #[command(
        name = "reset",
        about = "Move the current branch to the given commit",
        long_about = "This command checks out the snapshot of the given commit and moves \
        the current branch pointer to it. The commit may be referenced by a unique prefix."
    )]
    Reset {
        #[arg(index = 1, help = "The commit to reset to")]
        commit: String,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let pwd = std::env::current_dir()?;
    let path = pwd.to_string_lossy();

    // Every command except init requires an initialized repository.
    if !matches!(cli.command, Commands::Init) && !Repository::is_initialized(&path) {
        return Err(JotError::RepositoryMissing.into());
    }

    match &cli.command {
        Commands::Init => repository(&path)?.init(),
        Commands::Add { file } => repository(&path)?.add(file),
        Commands::Commit { message } => repository(&path)?.commit(message),
        Commands::Rm { file } => repository(&path)?.rm(file),
        Commands::Log => paged(&path, |repository| repository.log()),
        Commands::GlobalLog => paged(&path, |repository| repository.global_log()),
        Commands::Find { message } => repository(&path)?.find(message),
        Commands::Status => repository(&path)?.status(),
        Commands::Checkout { target, file } => match (target, file) {
            (Some(branch), None) => repository(&path)?.checkout_branch(branch),
            (None, Some(file)) => repository(&path)?.checkout_file(file),
            (Some(commit), Some(file)) => repository(&path)?.checkout_file_at(commit, file),
            (None, None) => Err(JotError::IncorrectOperands.into()),
        },
        Commands::Branch { name } => repository(&path)?.branch(name),
        Commands::RmBranch { name } => repository(&path)?.rm_branch(name),
        Commands::Reset { commit } => repository(&path)?.reset(commit),
    }
}

fn repository(path: &str) -> Result<Repository> {
    Repository::new(path, Box::new(std::io::stdout()))
}

/// Run a history command through the pager when stdout is a terminal.
///
/// Setting `NO_PAGER` forces plain output, which keeps the command usable in
/// scripts and pipelines.
fn paged(path: &str, operation: impl FnOnce(&Repository) -> Result<()>) -> Result<()> {
    let use_pager = std::io::stdout().is_terminal() && std::env::var_os("NO_PAGER").is_none();

    if use_pager {
        let pager = minus::Pager::new();
        let repository = Repository::new(path, Box::new(PagerWriter::new(pager.clone())))?;

        operation(&repository)?;
        minus::page_all(pager)?;
    } else {
        operation(&repository(path)?)?;
    }

    Ok(())
}
