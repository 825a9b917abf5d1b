//! Reporting of maximal fully-unversioned subtrees.

use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use untracked_core::ClassificationNode;

/// Lazy pre-order walk yielding the roots of fully-unversioned subtrees.
///
/// Versioned subtrees are skipped entirely, unversioned ones are reported at
/// their topmost node, and mixed nodes are descended in stored child order.
#[derive(Debug, Clone)]
pub struct UnversionedRoots<'a> {
    stack: Vec<&'a ClassificationNode>,
}

impl<'a> Iterator for UnversionedRoots<'a> {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if node.fully_versioned {
                continue;
            }
            if node.fully_unversioned {
                return Some(clean_path(&node.path));
            }
            self.stack.extend(node.children.iter().rev());
        }
        None
    }
}

/// Walk a classification, yielding the paths to report.
pub fn report(node: &ClassificationNode) -> UnversionedRoots<'_> {
    UnversionedRoots { stack: vec![node] }
}

/// Write one reported path per line. Returns the number of lines written.
pub fn write_report<W: Write>(node: &ClassificationNode, mut out: W) -> io::Result<usize> {
    let mut count = 0;
    for path in report(node) {
        write_path(&mut out, &path)?;
        out.write_all(b"\n")?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

/// Write the raw bytes of a path (Unix).
#[cfg(unix)]
fn write_path<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    out.write_all(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn write_path<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    write!(out, "{}", path.display())
}

/// Lexically normalize a path.
///
/// Repeated separators, `.` components and trailing separators disappear,
/// `..` cancels a preceding normal component and is dropped right after the
/// root. The filesystem is never consulted. An empty result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
