//! Classification tree container and statistics.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ScanWarning;
use crate::node::ClassificationNode;

/// Summary statistics for a classified tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Number of nodes visited (directories, plus plain files seen as leaves).
    pub nodes: u64,
    /// Number of repository boundaries detected.
    pub repositories: u64,
    /// Number of maximal fully-unversioned subtrees.
    pub unversioned_roots: u64,
    /// Deepest node below the root.
    pub max_depth: u32,
}

impl TreeStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute statistics from a finished classification.
    pub fn from_node(root: &ClassificationNode) -> Self {
        let mut stats = Self::new();
        // (node, depth, inside an already-counted unversioned root)
        let mut stack = vec![(root, 0u32, false)];

        while let Some((node, depth, covered)) = stack.pop() {
            stats.nodes += 1;
            stats.max_depth = stats.max_depth.max(depth);

            if node.is_repository() {
                stats.repositories += 1;
            }

            let covered = if !covered && !node.fully_versioned && node.fully_unversioned {
                stats.unversioned_roots += 1;
                true
            } else {
                covered
            };

            for child in &node.children {
                stack.push((child, depth + 1, covered));
            }
        }

        stats
    }
}

/// Complete classification of one root path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationTree {
    /// Root node of the classification.
    pub root: ClassificationNode,

    /// Root path as it was given.
    #[serde(serialize_with = "crate::path_serde::lossy")]
    pub root_path: PathBuf,

    /// Duration of the classification.
    pub scan_duration: Duration,

    /// Summary statistics.
    pub stats: TreeStats,

    /// Directories that could not be listed, in traversal order.
    pub warnings: Vec<ScanWarning>,
}

impl ClassificationTree {
    /// Create a new tree, computing its statistics.
    pub fn new(
        root: ClassificationNode,
        root_path: PathBuf,
        scan_duration: Duration,
        warnings: Vec<ScanWarning>,
    ) -> Self {
        let stats = TreeStats::from_node(&root);
        Self {
            root,
            root_path,
            scan_duration,
            stats,
            warnings,
        }
    }

    /// Check if the whole root is under version control.
    pub fn is_fully_versioned(&self) -> bool {
        self.root.fully_versioned
    }

    /// Check if there were any absorbed filesystem errors.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
