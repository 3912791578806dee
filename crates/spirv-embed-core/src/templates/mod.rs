//! Templates for the generated C++ files.
//!
//! File layouts are embedded into the binary at compile-time via [`include_str!`]
//! in the [`embedded`] module, then rendered at runtime with
//! [Handlebars](https://handlebarsjs.com/) via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! - `{{generator}}`: tool name written into the banner
//! - `{{namespace}}`: C++ namespace wrapping every symbol
//! - `{{file_name}}`, `{{var_name}}`, `{{raw_lines}}`, `{{total_data_count}}`: source only
//! - `{{declarations}}`: header only, the joined `extern` pairs
//!
//! **Warning**: the generated files are compiled downstream, so the layouts are
//! a byte-exact contract. The source defines `const volatile` objects while the
//! header declares them without `volatile`; keep that asymmetry when editing.

pub mod embedded;
pub mod renderer;
