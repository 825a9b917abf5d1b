//! Serialization helpers for filesystem paths.

use std::path::Path;

use serde::Serializer;

/// Serialize a path as a string, replacing invalid UTF-8 with U+FFFD.
///
/// JSON has no way to carry arbitrary bytes, and a single odd file name must
/// not make the whole report unserializable.
pub(crate) fn lossy<P, S>(path: &P, serializer: S) -> Result<S::Ok, S::Error>
where
    P: AsRef<Path>,
    S: Serializer,
{
    serializer.serialize_str(&path.as_ref().to_string_lossy())
}
