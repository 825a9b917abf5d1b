//! Recursive version-control classifier.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, trace};

use untracked_core::{
    ClassificationNode, ClassificationTree, ClassifyConfig, ClassifyError, ScanWarning,
};

use crate::detect::is_repository_root;

/// Classifies directory trees by version-control coverage.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier;

impl Classifier {
    /// Create a new classifier.
    pub fn new() -> Self {
        Self
    }

    /// Classify the configured root.
    ///
    /// Filesystem errors never fail the run; they are recorded as warnings
    /// and the affected path is treated as an unversioned leaf. The only
    /// error is a worker pool that cannot be built in parallel mode.
    pub fn classify(&self, config: &ClassifyConfig) -> Result<ClassificationTree, ClassifyError> {
        let start = Instant::now();
        let root = config.root.as_path();

        let (node, warnings) = if config.parallel {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(config.threads)
                .stack_size(config.stack_size)
                .thread_name(|i| format!("untracked-{i}"))
                .build()
                .map_err(|e| ClassifyError::ThreadPool {
                    message: e.to_string(),
                })?;
            pool.install(|| classify_parallel(root.to_path_buf()))
        } else {
            let mut warnings = Vec::new();
            let node = classify_sequential(root, &mut warnings);
            (node, warnings)
        };

        let tree = ClassificationTree::new(node, root.to_path_buf(), start.elapsed(), warnings);

        info!(
            root = %root.display(),
            nodes = tree.stats.nodes,
            repositories = tree.stats.repositories,
            unversioned_roots = tree.stats.unversioned_roots,
            warnings = tree.warnings.len(),
            elapsed_ms = tree.scan_duration.as_millis() as u64,
            "classification finished"
        );

        Ok(tree)
    }
}

/// Classify `path`, discarding warnings.
pub fn classify(path: impl AsRef<Path>) -> ClassificationNode {
    let mut warnings = Vec::new();
    classify_sequential(path.as_ref(), &mut warnings)
}

/// A directory whose children are still being classified.
struct Frame {
    node: ClassificationNode,
    pending: std::vec::IntoIter<OsString>,
}

/// Outcome of looking at a single path.
enum Step {
    /// Classification is final (repository or leaf).
    Done(ClassificationNode),
    /// Children must be classified first.
    Descend(Frame),
}

fn enter(path: PathBuf, warnings: &mut Vec<ScanWarning>) -> Step {
    trace!(path = %path.display(), "visiting");

    if is_repository_root(&path) {
        debug!(path = %path.display(), "repository found");
        return Step::Done(ClassificationNode::versioned(path));
    }

    let names = read_dir_names(&path, warnings);
    if names.is_empty() {
        return Step::Done(ClassificationNode::unversioned_leaf(path));
    }

    Step::Descend(Frame {
        node: ClassificationNode::aggregate(path),
        pending: names.into_iter(),
    })
}

/// Depth-first classification with an explicit work-list, so native stack
/// depth does not grow with directory nesting.
fn classify_sequential(root: &Path, warnings: &mut Vec<ScanWarning>) -> ClassificationNode {
    let mut current = match enter(root.to_path_buf(), warnings) {
        Step::Done(node) => return node,
        Step::Descend(frame) => frame,
    };
    let mut parents: Vec<Frame> = Vec::new();

    loop {
        match current.pending.next() {
            Some(name) => match enter(current.node.path.join(name), warnings) {
                Step::Done(child) => current.node.push_child(child),
                Step::Descend(child) => parents.push(std::mem::replace(&mut current, child)),
            },
            None => match parents.pop() {
                Some(mut parent) => {
                    parent.node.push_child(current.node);
                    current = parent;
                }
                None => return current.node,
            },
        }
    }
}

/// Classify sibling subtrees on the current rayon pool.
///
/// `collect` keeps child order, so the result matches the sequential walk.
fn classify_parallel(path: PathBuf) -> (ClassificationNode, Vec<ScanWarning>) {
    let mut warnings = Vec::new();

    let frame = match enter(path, &mut warnings) {
        Step::Done(node) => return (node, warnings),
        Step::Descend(frame) => frame,
    };

    let Frame { mut node, pending } = frame;
    let names: Vec<OsString> = pending.collect();

    let children: Vec<(ClassificationNode, Vec<ScanWarning>)> = names
        .par_iter()
        .map(|name| classify_parallel(node.path.join(name)))
        .collect();

    for (child, child_warnings) in children {
        node.push_child(child);
        warnings.extend(child_warnings);
    }

    (node, warnings)
}

/// List entry names of `path`, sorted. Any failure yields no entries.
fn read_dir_names(path: &Path, warnings: &mut Vec<ScanWarning>) -> Vec<OsString> {
    let listing = std::fs::read_dir(path).and_then(|entries| {
        entries
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<std::io::Result<Vec<_>>>()
    });

    match listing {
        Ok(mut names) => {
            names.sort();
            names
        }
        // Plain files end up here; they are ordinary leaves, not failures.
        Err(err) if err.kind() == ErrorKind::NotADirectory => Vec::new(),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "cannot list directory");
            warnings.push(ScanWarning::from_io(path, &err));
            Vec::new()
        }
    }
}
