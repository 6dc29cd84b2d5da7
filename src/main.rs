//! `gitlet` — the command-line façade over the [`gitlet`] engine.
//!
//! Thin by design (§9 "process-exit-as-control-flow → explicit error
//! returns"): parse argv with `clap`, open a [`Repo`], dispatch to one
//! engine call, and render the resulting `GitletError` to the prescribed
//! user-facing line. Anything that isn't one of those prescribed lines
//! (a corrupt object, a config parse failure, an I/O error) is an
//! `anyhow`-propagated failure with a nonzero exit instead.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};

use gitlet::engine::{self, Repo};
use gitlet::error::GitletError;
use gitlet::telemetry;

/// A miniature, content-addressed version-control system.
#[derive(Parser)]
#[command(name = "gitlet", version, about)]
struct Cli {
    /// Raise the log level to debug (see `GITLET_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new repository in the current directory.
    Init,
    /// Stage a file for the next commit.
    Add { file: String },
    /// Record a new commit from the staging area.
    Commit { message: String },
    /// Unstage or mark a file for removal.
    Rm { file: String },
    /// Show commit history, following the first-parent chain from HEAD.
    Log,
    /// Show every commit ever made, in no particular order.
    #[command(name = "global-log")]
    GlobalLog,
    /// List the ids of every commit with the exact given message.
    Find { message: String },
    /// Show branches, staged/removed files, and working-tree differences.
    Status,
    /// Restore a file, or switch to a branch.
    Checkout(CheckoutArgs),
    /// Create a new branch pointing at HEAD.
    Branch { name: String },
    /// Delete a branch (never its commits).
    #[command(name = "rm-branch")]
    RmBranch { name: String },
    /// Move HEAD and the current branch to an arbitrary commit.
    Reset { commit_id: String },
    /// Merge another branch into the current branch.
    Merge { branch: String },
}

/// `checkout -- <file>`, `checkout <commit> -- <file>`, or `checkout <branch>`.
///
/// `file` is only settable when the user actually wrote a literal `--`
/// before it (clap's `last` positional semantics), which is what
/// distinguishes `checkout <branch>` from `checkout -- <file>`.
#[derive(Args)]
struct CheckoutArgs {
    /// A branch name, or (only together with `-- <file>`) a commit id.
    target: Option<String>,
    #[arg(last = true)]
    file: Option<String>,
}

fn main() -> Result<()> {
    let cwd = std::env::current_dir().context("could not determine current directory")?;

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(&err),
    };

    telemetry::init(cli.verbose);

    let Some(command) = cli.command else {
        println!("{}", GitletError::NoCommandGiven);
        return Ok(());
    };

    let repo = Repo::open(cwd)?;
    report(dispatch(&repo, command))
}

fn dispatch(repo: &Repo, command: Commands) -> Result<(), GitletError> {
    match command {
        Commands::Init => engine::init::run(repo),
        Commands::Add { file } => engine::add::run(repo, &file),
        Commands::Commit { message } => engine::commit::run(repo, &message, None).map(|_| ()),
        Commands::Rm { file } => engine::rm::run(repo, &file),
        Commands::Log => {
            print!("{}", engine::history::log(repo)?);
            Ok(())
        }
        Commands::GlobalLog => {
            print!("{}", engine::history::global_log(repo)?);
            Ok(())
        }
        Commands::Find { message } => {
            for id in engine::history::find(repo, &message)? {
                println!("{id}");
            }
            Ok(())
        }
        Commands::Status => {
            let reconciliation = engine::status::run(repo)?;
            print!("{}", engine::status::render(&reconciliation));
            Ok(())
        }
        Commands::Checkout(args) => dispatch_checkout(repo, args),
        Commands::Branch { name } => engine::branch::create(repo, &name),
        Commands::RmBranch { name } => engine::branch::delete(repo, &name),
        Commands::Reset { commit_id } => engine::reset::run(repo, &commit_id),
        Commands::Merge { branch } => dispatch_merge(repo, &branch),
    }
}

fn dispatch_checkout(repo: &Repo, args: CheckoutArgs) -> Result<(), GitletError> {
    match (args.target, args.file) {
        (None, Some(file)) => engine::checkout::file_from_head(repo, &file),
        (Some(commit_id), Some(file)) => engine::checkout::file_from_commit(repo, &commit_id, &file),
        (Some(branch_name), None) => engine::checkout::branch(repo, &branch_name),
        (None, None) => Err(GitletError::IncorrectOperands),
    }
}

fn dispatch_merge(repo: &Repo, branch: &str) -> Result<(), GitletError> {
    match engine::merge::run(repo, branch)? {
        engine::merge::MergeResult::AlreadyUpToDate => {
            println!("Given branch is an ancestor of the current branch.");
            Ok(())
        }
        engine::merge::MergeResult::FastForwarded => {
            println!("Current branch fast-forwarded.");
            Ok(())
        }
        engine::merge::MergeResult::Merged { had_conflict } => {
            if had_conflict {
                println!("Encountered a merge conflict.");
            }
            Ok(())
        }
    }
}

/// Turn a `clap` parse failure into one of the prescribed CLI strings
/// rather than clap's own usage text, except for `--help`/`--version`
/// which print as clap intends (§6, "out of band from the table above").
fn handle_parse_error(err: &clap::Error) -> Result<()> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{err}");
            Ok(())
        }
        ErrorKind::InvalidSubcommand | ErrorKind::UnknownArgument => {
            println!("{}", GitletError::NoSuchCommand);
            Ok(())
        }
        _ => {
            println!("{}", GitletError::IncorrectOperands);
            Ok(())
        }
    }
}

/// Render the engine's result: a prescribed line + exit 0 for every
/// recoverable `GitletError`, or a nonzero exit for I/O failures and
/// internal invariant violations.
fn report(result: Result<(), GitletError>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(GitletError::Io(io_err)) => Err(io_err).context("I/O error"),
        Err(err) if err.is_internal() => anyhow::bail!("{err:?}"),
        Err(err) => {
            println!("{err}");
            Ok(())
        }
    }
}
