//! Core library for spirv-embed.
//!
//! Turns pre-compiled SPIR-V word lists (text files holding comma-separated
//! numeric literals, as emitted by `glslangValidator -x`) into C++ translation
//! units that embed the words as static arrays, plus one aggregate header
//! declaring every embedded array.
//!
//! - [`source::generate_source`] writes `<file>.cpp` for a single word list
//! - [`header::generate_header`] writes the `extern` declarations for many
//!
//! Both share the naming convention in [`naming`]: the symbol for `foo.vert.spv`
//! is `foo_vert_spv`, and its element count is `foo_vert_spv_count`.

pub mod blob;
pub mod error;
pub mod header;
pub mod naming;
pub mod source;
pub mod templates;

/// Name written into the banner of every generated file.
pub const GENERATOR: &str = "spirv-embed";
