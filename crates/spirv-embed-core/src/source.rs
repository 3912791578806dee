//! The `source` emitter: one word list in, one `.cpp` definition out.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::blob::SpirvBlob;
use crate::error::{Result, SpirvEmbedError};
use crate::naming;
use crate::templates::{embedded, renderer::TemplateRenderer};
use crate::GENERATOR;

/// Extension appended to the input's base name for the generated file.
pub const SOURCE_EXTENSION: &str = ".cpp";

#[derive(Serialize)]
struct SourceContext<'a> {
    generator: &'a str,
    namespace: &'a str,
    file_name: &'a str,
    var_name: &'a str,
    raw_lines: &'a str,
    total_data_count: usize,
}

/// Render the translation unit that defines `blob` inside `namespace`.
pub fn render_source(blob: &SpirvBlob, namespace: &str) -> Result<String> {
    let data = SourceContext {
        generator: GENERATOR,
        namespace,
        file_name: &blob.file_name,
        var_name: &blob.var_name,
        raw_lines: &blob.contents,
        total_data_count: blob.element_count(),
    };
    TemplateRenderer::new().render(embedded::SOURCE_CPP, &data)
}

/// Path of the file [`generate_source`] writes for `src_path` into `dest_dir`.
pub fn output_path(src_path: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let file_name = naming::file_name(src_path)
        .ok_or_else(|| SpirvEmbedError::NoFileName(src_path.to_path_buf()))?;
    Ok(dest_dir.join(format!("{file_name}{SOURCE_EXTENSION}")))
}

/// Generate `<dest_dir>/<basename(src_path)>.cpp` embedding the word list at
/// `src_path`.
///
/// `dest_dir` must already exist. An existing output file is overwritten.
/// Returns the path that was written.
pub fn generate_source(src_path: &Path, dest_dir: &Path, namespace: &str) -> Result<PathBuf> {
    let blob = SpirvBlob::read(src_path)?;
    let rendered = render_source(&blob, namespace)?;

    let out = output_path(src_path, dest_dir)?;
    std::fs::write(&out, rendered).map_err(|e| SpirvEmbedError::WriteOutput {
        path: out.clone(),
        source: e,
    })?;

    info!(
        output = %out.display(),
        array = %blob.var_name,
        count = %naming::count_name(src_path),
        elements = blob.element_count(),
        "wrote source"
    );
    Ok(out)
}
