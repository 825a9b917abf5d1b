//! Core types for untracked.
//!
//! This crate provides the data structures shared by the classification
//! engine and the command-line tool: classification nodes and trees,
//! configuration, and error types.

mod config;
mod error;
mod node;
mod path_serde;
mod tree;

pub use config::{ClassifyConfig, ClassifyConfigBuilder, DEFAULT_STACK_SIZE};
pub use error::{ClassifyError, ScanWarning, WarningKind};
pub use node::{ClassificationNode, NodeStatus};
pub use tree::{ClassificationTree, TreeStats};
