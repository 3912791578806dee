//! Loading of pre-stringified SPIR-V word lists.
//!
//! The contents are opaque: no attempt is made to check that each segment is a
//! valid numeric literal. They are pasted verbatim into the generated
//! initializer, and the element count is purely syntactic.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SpirvEmbedError};
use crate::naming;

/// Count the elements of a comma-separated word list.
///
/// This is the number of `,`-separated segments, so an empty string counts as
/// one element. Whitespace and a trailing newline belong to the last segment.
pub fn element_count(contents: &str) -> usize {
    contents.split(',').count()
}

/// A word list read from disk together with the names derived from its path.
#[derive(Debug, Clone)]
pub struct SpirvBlob {
    /// Path the contents were read from.
    pub path: PathBuf,
    /// Base name of `path`, e.g. `foo.vert.spv`.
    pub file_name: String,
    /// Array symbol, e.g. `foo_vert_spv`.
    pub var_name: String,
    /// Raw file contents.
    pub contents: String,
}

impl SpirvBlob {
    /// Read the word list at `path`.
    pub fn read(path: &Path) -> Result<Self> {
        let file_name = naming::file_name(path)
            .ok_or_else(|| SpirvEmbedError::NoFileName(path.to_path_buf()))?;

        let contents =
            std::fs::read_to_string(path).map_err(|e| SpirvEmbedError::ReadInput {
                path: path.to_path_buf(),
                source: e,
            })?;

        let blob = Self {
            path: path.to_path_buf(),
            file_name,
            var_name: naming::var_name(path),
            contents,
        };
        debug!(
            path = %blob.path.display(),
            var_name = %blob.var_name,
            count = blob.element_count(),
            "loaded word list"
        );
        Ok(blob)
    }

    /// Number of elements in the array this blob will define.
    pub fn element_count(&self) -> usize {
        element_count(&self.contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_count() {
        assert_eq!(element_count("1,2,3"), 3);
        assert_eq!(element_count("1"), 1);
        assert_eq!(element_count("0x07230203, 0x00010000,\n0x0008000a"), 3);
    }

    #[test]
    fn test_element_count_empty_is_one() {
        assert_eq!(element_count(""), 1);
    }

    #[test]
    fn test_element_count_trailing_comma_adds_segment() {
        assert_eq!(element_count("1,2,"), 3);
    }

    #[test]
    fn test_read_derives_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("foo.frag.spv");
        std::fs::write(&path, "10,20,30,40").unwrap();

        let blob = SpirvBlob::read(&path).unwrap();
        assert_eq!(blob.file_name, "foo.frag.spv");
        assert_eq!(blob.var_name, "foo_frag_spv");
        assert_eq!(blob.contents, "10,20,30,40");
        assert_eq!(blob.element_count(), 4);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SpirvBlob::read(&dir.path().join("missing.spv")).unwrap_err();
        assert!(matches!(err, SpirvEmbedError::ReadInput { .. }));
    }

    #[test]
    fn test_read_no_file_name() {
        let err = SpirvBlob::read(Path::new("dir/x.spv/")).unwrap_err();
        assert!(matches!(err, SpirvEmbedError::NoFileName(_)));
    }
}
