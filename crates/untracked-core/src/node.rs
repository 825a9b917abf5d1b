//! Classification node types.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Aggregate version-control status of a directory subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    /// Every part of the subtree lies inside a detected repository.
    Versioned,
    /// No repository anywhere in the subtree.
    Unversioned,
    /// Both versioned and unversioned descendants.
    Mixed,
}

impl NodeStatus {
    /// Derive the status from the two aggregate flags.
    ///
    /// `fully_versioned` takes precedence, matching the reporter's walk order.
    pub fn from_flags(fully_versioned: bool, fully_unversioned: bool) -> Self {
        if fully_versioned {
            NodeStatus::Versioned
        } else if fully_unversioned {
            NodeStatus::Unversioned
        } else {
            NodeStatus::Mixed
        }
    }

    /// Short lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStatus::Versioned => "versioned",
            NodeStatus::Unversioned => "unversioned",
            NodeStatus::Mixed => "mixed",
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One directory's status in a classification.
///
/// Children are only populated when the directory is not itself a
/// repository root, and are always stored in lexicographic name order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationNode {
    /// Path as given, or built by joining a child name onto its parent.
    #[serde(serialize_with = "crate::path_serde::lossy")]
    pub path: PathBuf,

    /// True if this directory (or every descendant) is under version control.
    pub fully_versioned: bool,

    /// True if no repository exists anywhere in this subtree.
    pub fully_unversioned: bool,

    /// One node per direct entry, sorted by name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ClassificationNode>,
}

impl ClassificationNode {
    /// Create a node for a detected repository boundary.
    pub fn versioned(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fully_versioned: true,
            fully_unversioned: false,
            children: Vec::new(),
        }
    }

    /// Create a node for an empty or unreadable directory (or a plain file).
    pub fn unversioned_leaf(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fully_versioned: false,
            fully_unversioned: true,
            children: Vec::new(),
        }
    }

    /// Create a node that will aggregate its children.
    ///
    /// Both flags start out true, the identity of the AND-reduction.
    pub fn aggregate(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fully_versioned: true,
            fully_unversioned: true,
            children: Vec::new(),
        }
    }

    /// Append a classified child and fold its flags into this node.
    pub fn push_child(&mut self, child: ClassificationNode) {
        self.fully_versioned &= child.fully_versioned;
        self.fully_unversioned &= child.fully_unversioned;
        self.children.push(child);
    }

    /// The path of this node.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Aggregate status of the subtree.
    pub fn status(&self) -> NodeStatus {
        NodeStatus::from_flags(self.fully_versioned, self.fully_unversioned)
    }

    /// Check if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Check if this node is a repository boundary (recursion stopped here).
    pub fn is_repository(&self) -> bool {
        self.fully_versioned && self.children.is_empty()
    }

    /// Get the number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Count all nodes below this one.
    pub fn descendant_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&ClassificationNode> = self.children.iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}
