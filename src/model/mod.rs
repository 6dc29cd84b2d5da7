//! Core domain types for Gitlet: identifiers, blobs, commits, branches,
//! HEAD, and the staging area.

pub mod blob;
pub mod branch;
pub mod commit;
pub mod hash;
pub mod head;
pub mod staging;
pub mod types;

pub use blob::Blob;
pub use branch::Branch;
pub use commit::{Author, Commit};
pub use head::Head;
pub use staging::StagingArea;
pub use types::{BlobId, CommitId, ObjectId, Tree};
