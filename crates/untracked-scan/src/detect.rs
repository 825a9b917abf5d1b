//! Structural repository detection.
//!
//! A directory counts as a repository when it is shaped like a bare git
//! repository, or when it holds a `.git` directory shaped that way. Only
//! existence is checked; contents are never read.

use std::path::Path;

/// Name of the repository directory inside a working tree.
pub const GIT_DIR: &str = ".git";

/// Entries that together make a directory bare-repository-shaped.
pub const BARE_MARKERS: [&str; 3] = ["objects", "refs", "HEAD"];

/// Check if `path` contains every bare-repository marker.
pub fn is_bare_repository(path: &Path) -> bool {
    BARE_MARKERS.iter().all(|marker| path.join(marker).exists())
}

/// Check if `path` is a repository root: bare-shaped itself, or holding a
/// bare-shaped `.git` directory.
pub fn is_repository_root(path: &Path) -> bool {
    // Joining onto an empty path would look inside the working directory.
    if path.as_os_str().is_empty() {
        return false;
    }
    let git_dir = path.join(GIT_DIR);
    (git_dir.is_dir() && is_bare_repository(&git_dir)) || is_bare_repository(path)
}
