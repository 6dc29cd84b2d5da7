//! Branches — named, mutable pointers to a commit.

use serde::{Deserialize, Serialize};

use super::types::CommitId;

/// A named pointer to a commit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    name: String,
    target: CommitId,
}

impl Branch {
    /// Create a branch named `name` pointing at `target`.
    #[must_use]
    pub const fn new(name: String, target: CommitId) -> Self {
        Self { name, target }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn target(&self) -> &CommitId {
        &self.target
    }

    /// Advance this branch to point at `target`.
    pub fn set_target(&mut self, target: CommitId) {
        self.target = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::ObjectId;

    #[test]
    fn set_target_advances_the_ref() {
        let id_a = CommitId::from_object_id(ObjectId::new(&"a".repeat(40)).unwrap());
        let id_b = CommitId::from_object_id(ObjectId::new(&"b".repeat(40)).unwrap());
        let mut branch = Branch::new("master".to_owned(), id_a.clone());
        assert_eq!(branch.target(), &id_a);
        branch.set_target(id_b.clone());
        assert_eq!(branch.target(), &id_b);
    }
}
