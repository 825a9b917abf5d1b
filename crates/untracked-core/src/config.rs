//! Classification configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Default worker stack size for parallel classification (8 MiB).
pub const DEFAULT_STACK_SIZE: usize = 8 * 1024 * 1024;

/// Configuration for a classification run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ClassifyConfig {
    /// Root path to classify.
    pub root: PathBuf,

    /// Classify sibling subtrees in parallel.
    #[builder(default = "false")]
    #[serde(default)]
    pub parallel: bool,

    /// Number of worker threads when parallel (0 = auto-detect).
    #[builder(default = "0")]
    #[serde(default)]
    pub threads: usize,

    /// Stack size of each parallel worker, in bytes.
    #[builder(default = "DEFAULT_STACK_SIZE")]
    #[serde(default = "default_stack_size")]
    pub stack_size: usize,
}

fn default_stack_size() -> usize {
    DEFAULT_STACK_SIZE
}

impl ClassifyConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.root.is_none() {
            return Err("Root path is required".to_string());
        }
        if self.stack_size == Some(0) {
            return Err("Stack size must be non-zero".to_string());
        }
        Ok(())
    }
}

impl ClassifyConfig {
    /// Create a new config builder.
    pub fn builder() -> ClassifyConfigBuilder {
        ClassifyConfigBuilder::default()
    }

    /// Create a simple sequential config for a path.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            parallel: false,
            threads: 0,
            stack_size: DEFAULT_STACK_SIZE,
        }
    }
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self::new(".")
    }
}
