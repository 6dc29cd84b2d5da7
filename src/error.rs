//! Gitlet error types.
//!
//! Defines [`GitletError`], the unified error type for all engine operations.
//! Every recoverable variant's `Display` impl renders **exactly** the
//! user-facing line the command-line interface prints to stdout — no extra
//! prose, unlike a typical richly-annotated error type, because the wording
//! here is part of the contract the CLI is built against.
//!
//! [`GitletError::Internal`] is reserved for invariant violations (a stored
//! commit whose parent is missing, a corrupt object file) that should never
//! happen in a correct implementation; the binary surfaces those as a
//! nonzero exit rather than one of the prescribed lines.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// GitletError
// ---------------------------------------------------------------------------

/// Unified error type for Gitlet engine operations.
#[derive(Debug)]
pub enum GitletError {
    /// `init` was run in a directory that already has a `.gitlet`.
    AlreadyInitialized,

    /// Any command other than `init` was run outside a Gitlet repository.
    NotInitialized,

    /// `add <file>` named a file that does not exist in the working directory.
    NoSuchFile,

    /// `rm <file>` named a file that is neither staged nor tracked.
    NoReasonToRemove,

    /// `commit` was attempted with both the staged additions and removals empty.
    NothingToCommit,

    /// `commit` was given an empty message.
    EmptyCommitMessage,

    /// `checkout -- <file>` / `checkout <id> -- <file>` named an untracked file.
    FileNotInCommit,

    /// `checkout <id> -- <file>` or `reset <id>` named an id that does not resolve.
    NoSuchCommit,

    /// `branch`, `rm-branch`, `checkout <branch>`, or `merge` named a ref that
    /// does not exist.
    NoSuchBranch,

    /// `branch <name>` named a branch that already exists.
    BranchExists,

    /// `checkout <branch>` named the branch that is already current.
    AlreadyOnBranch,

    /// `rm-branch` named the current branch.
    CannotRemoveCurrentBranch,

    /// A file untracked by HEAD would be clobbered by a checkout/reset/merge.
    UntrackedFileInTheWay,

    /// `merge` was attempted with a non-empty staging area.
    UncommittedChanges,

    /// `merge <branch>` named the current branch.
    CannotMergeSelf,

    /// `find <message>` matched no stored commit.
    NoCommitWithThatMessage,

    /// Argument count or shape did not match the command.
    IncorrectOperands,

    /// The first argument did not name a known command.
    NoSuchCommand,

    /// No arguments were given at all.
    NoCommandGiven,

    /// A configuration file could not be parsed.
    ConfigError {
        /// Path to the offending file.
        path: PathBuf,
        /// Human-readable description of the problem.
        detail: String,
    },

    /// An I/O error occurred while reading or writing repository state.
    Io(std::io::Error),

    /// An invariant that should always hold was violated. Never printed as
    /// one of the prescribed user-facing lines.
    Internal(String),
}

// ---------------------------------------------------------------------------
// Display — exact, prescribed user-facing lines
// ---------------------------------------------------------------------------

impl fmt::Display for GitletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInitialized => {
                write!(f, "A Gitlet version-control system already exists in the current directory.")
            }
            Self::NotInitialized => write!(f, "Not in an initialized Gitlet directory."),
            Self::NoSuchFile => write!(f, "File does not exist."),
            Self::NoReasonToRemove => write!(f, "No reason to remove the file."),
            Self::NothingToCommit => write!(f, "No changes added to the commit."),
            Self::EmptyCommitMessage => write!(f, "Please enter a commit message."),
            Self::FileNotInCommit => write!(f, "File does not exist in that commit."),
            Self::NoSuchCommit => write!(f, "No commit with that id exists."),
            Self::NoSuchBranch => write!(f, "No such branch exists."),
            Self::BranchExists => write!(f, "A branch with that name already exists."),
            Self::AlreadyOnBranch => write!(f, "No need to checkout the current branch."),
            Self::CannotRemoveCurrentBranch => {
                write!(f, "Cannot remove the current branch.")
            }
            Self::UntrackedFileInTheWay => write!(
                f,
                "There is an untracked file in the way; delete it, or add and commit it first."
            ),
            Self::UncommittedChanges => write!(f, "You have uncommitted changes."),
            Self::CannotMergeSelf => write!(f, "Cannot merge a branch with itself."),
            Self::NoCommitWithThatMessage => write!(f, "Found no commit with that message."),
            Self::IncorrectOperands => write!(f, "Incorrect operands."),
            Self::NoSuchCommand => write!(f, "No command with that name exists."),
            Self::NoCommandGiven => write!(f, "Please enter a command."),
            Self::ConfigError { path, detail } => {
                write!(f, "configuration error in '{}': {}", path.display(), detail)
            }
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Internal(detail) => write!(f, "internal error: {detail}"),
        }
    }
}

impl std::error::Error for GitletError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GitletError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl GitletError {
    /// `true` for variants representing an internal invariant violation
    /// rather than a user-facing, recoverable failure.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_untracked_file_in_the_way() {
        let msg = GitletError::UntrackedFileInTheWay.to_string();
        assert_eq!(
            msg,
            "There is an untracked file in the way; delete it, or add and commit it first."
        );
    }

    #[test]
    fn display_nothing_to_commit() {
        assert_eq!(
            GitletError::NothingToCommit.to_string(),
            "No changes added to the commit."
        );
    }

    #[test]
    fn display_empty_commit_message() {
        assert_eq!(
            GitletError::EmptyCommitMessage.to_string(),
            "Please enter a commit message."
        );
    }

    #[test]
    fn display_no_such_branch() {
        assert_eq!(GitletError::NoSuchBranch.to_string(), "No such branch exists.");
    }

    #[test]
    fn display_cannot_merge_self() {
        assert_eq!(
            GitletError::CannotMergeSelf.to_string(),
            "Cannot merge a branch with itself."
        );
    }

    #[test]
    fn display_config_error() {
        let err = GitletError::ConfigError {
            path: PathBuf::from(".gitlet/config"),
            detail: "invalid TOML".to_owned(),
        };
        let msg = err.to_string();
        assert!(msg.contains(".gitlet/config"));
        assert!(msg.contains("invalid TOML"));
    }

    #[test]
    fn internal_is_not_a_prescribed_line() {
        let err = GitletError::Internal("missing parent commit".to_owned());
        assert!(err.is_internal());
        assert!(err.to_string().contains("internal error"));
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::other("disk full");
        let err: GitletError = io_err.into();
        assert!(matches!(err, GitletError::Io(_)));
        assert!(!err.is_internal());
    }

    #[test]
    fn error_source_io() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = GitletError::Io(inner);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn error_source_non_io_is_none() {
        assert!(std::error::Error::source(&GitletError::NoSuchFile).is_none());
    }
}
