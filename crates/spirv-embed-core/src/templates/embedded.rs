//! Compile-time embedded file layouts.
//!
//! Paths are relative to this source file
//! (`crates/spirv-embed-core/src/templates/embedded.rs`). Moving a template
//! without updating its `include_str!` path fails the build.

/// One `<file>.cpp` defining an embedded array and its element count.
pub const SOURCE_CPP: &str = include_str!("../../../../templates/cpp/source.cpp.tmpl");

/// The aggregate header; `{{declarations}}` receives the joined extern pairs.
pub const HEADER_H: &str = include_str!("../../../../templates/cpp/header.h.tmpl");

/// Forward declarations for one embedded array.
pub const HEADER_DECLARATION: &str =
    "extern const uint32_t {{var_name}}[];\nextern const size_t {{var_name}}_count;";

/// Separator between consecutive declaration pairs in the header.
pub const DECLARATION_SEPARATOR: &str = "\n\n";
