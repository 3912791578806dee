//! Symbol naming shared by the source and header emitters.
//!
//! A word list's symbol is its base file name with every `.` replaced by `_`,
//! so `shaders/foo.vert.spv` becomes `foo_vert_spv`. The element-count
//! constant appends [`COUNT_SUFFIX`].
//!
//! Two inputs whose base names match (e.g. `a/x.spv` and `b/x.spv`) map to the
//! same symbol. Nothing here detects that; callers pass pairwise-distinct names.

use std::path::{is_separator, Path};

/// Suffix of the element-count constant that accompanies every array.
pub const COUNT_SUFFIX: &str = "_count";

/// The text after the last separator in `path`, like POSIX `basename` without
/// trailing-slash stripping. `.` and `..` are kept as names; `dir/` has none.
fn base_name(path: &Path) -> String {
    let text = path.to_string_lossy();
    text.rsplit(is_separator).next().unwrap_or_default().to_owned()
}

/// The final component of `path` as text, if it is non-empty.
pub fn file_name(path: &Path) -> Option<String> {
    Some(base_name(path)).filter(|name| !name.is_empty())
}

/// Derive the array symbol for `path`.
///
/// Returns an empty string when the path ends in a separator.
pub fn var_name(path: &Path) -> String {
    base_name(path).replace('.', "_")
}

/// Derive the element-count symbol for `path`.
pub fn count_name(path: &Path) -> String {
    format!("{}{COUNT_SUFFIX}", var_name(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_name_replaces_every_dot() {
        assert_eq!(var_name(Path::new("shaders/foo.vert.spv")), "foo_vert_spv");
    }

    #[test]
    fn test_var_name_ignores_directories() {
        assert_eq!(var_name(Path::new("a.spv")), "a_spv");
        assert_eq!(var_name(Path::new("sub/b.spv")), "b_spv");
        assert_eq!(var_name(Path::new("/abs/dir.d/c.spv")), "c_spv");
    }

    #[test]
    fn test_var_name_without_extension() {
        assert_eq!(var_name(Path::new("blob")), "blob");
    }

    #[test]
    fn test_var_name_dot_components() {
        assert_eq!(var_name(Path::new("..")), "__");
        assert_eq!(var_name(Path::new("a/..")), "__");
        assert_eq!(var_name(Path::new(".")), "_");
    }

    #[test]
    fn test_var_name_trailing_separator() {
        assert_eq!(var_name(Path::new("dir/x.spv/")), "");
        assert_eq!(var_name(Path::new("/")), "");
    }

    #[test]
    fn test_same_base_name_collides() {
        assert_eq!(
            var_name(Path::new("a/x.spv")),
            var_name(Path::new("b/x.spv"))
        );
    }

    #[test]
    fn test_count_name() {
        assert_eq!(count_name(Path::new("test.spv")), "test_spv_count");
    }

    #[test]
    fn test_file_name_keeps_dots() {
        assert_eq!(
            file_name(Path::new("shaders/foo.vert.spv")).as_deref(),
            Some("foo.vert.spv")
        );
        assert_eq!(file_name(Path::new("..")).as_deref(), Some(".."));
        assert_eq!(file_name(Path::new("dir/x.spv/")), None);
        assert_eq!(file_name(Path::new("")), None);
    }
}
