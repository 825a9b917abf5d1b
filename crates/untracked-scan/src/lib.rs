//! Version-control classification engine for untracked.
//!
//! This crate walks a directory tree and works out which parts of it are
//! covered by a version-control repository.
//!
//! # Overview
//!
//! - **Detection** of repository roots by shape (`objects`, `refs`, `HEAD`,
//!   either directly or under `.git`)
//! - **Classification** into a tree of nodes, each fully versioned, fully
//!   unversioned, or mixed; recursion stops at repository boundaries
//! - **Reporting** of the topmost directories that are entirely outside
//!   version control
//!
//! Filesystem errors are never fatal: an unreadable directory is treated as
//! an empty, unversioned one and recorded as a warning.
//!
//! # Example
//!
//! ```rust,no_run
//! use untracked_scan::{Classifier, ClassifyConfig, report};
//!
//! let config = ClassifyConfig::new("/path/to/projects");
//! let tree = Classifier::new().classify(&config).unwrap();
//!
//! for path in report(&tree.root) {
//!     println!("{}", path.display());
//! }
//! ```

mod classifier;
mod detect;
mod report;

pub use classifier::{Classifier, classify};
pub use detect::{BARE_MARKERS, GIT_DIR, is_bare_repository, is_repository_root};
pub use report::{UnversionedRoots, clean_path, report, write_report};

// Re-export core types for convenience
pub use untracked_core::{
    ClassificationNode, ClassificationTree, ClassifyConfig, ClassifyError, NodeStatus,
    ScanWarning, TreeStats, WarningKind,
};
