//! The `header` emitter: many word-list paths in, one header of `extern`
//! declarations out.
//!
//! Only the paths are used; the word lists themselves are never opened, so the
//! header can be generated before (or in parallel with) the sources.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, SpirvEmbedError};
use crate::naming;
use crate::templates::{embedded, renderer::TemplateRenderer};
use crate::GENERATOR;

#[derive(Serialize)]
struct DeclarationContext {
    var_name: String,
}

#[derive(Serialize)]
struct HeaderContext<'a> {
    generator: &'a str,
    namespace: &'a str,
    declarations: String,
}

/// Render the header declaring every array in `spirv_files`, in the given order.
pub fn render_header<P: AsRef<Path>>(spirv_files: &[P], namespace: &str) -> Result<String> {
    if spirv_files.is_empty() {
        return Err(SpirvEmbedError::NoHeaderInputs);
    }

    let renderer = TemplateRenderer::new();
    let declarations = spirv_files
        .iter()
        .map(|path| {
            let var_name = naming::var_name(path.as_ref());
            debug!(path = %path.as_ref().display(), %var_name, "declaring");
            renderer.render(embedded::HEADER_DECLARATION, &DeclarationContext { var_name })
        })
        .collect::<Result<Vec<_>>>()?
        .join(embedded::DECLARATION_SEPARATOR);

    let data = HeaderContext {
        generator: GENERATOR,
        namespace,
        declarations,
    };
    renderer.render(embedded::HEADER_H, &data)
}

/// Generate the header at `dest_path` declaring every array in `spirv_files`.
///
/// The parent directory of `dest_path` must already exist. An existing header
/// is overwritten. Returns the path that was written.
pub fn generate_header<P: AsRef<Path>>(
    spirv_files: &[P],
    dest_path: &Path,
    namespace: &str,
) -> Result<PathBuf> {
    let rendered = render_header(spirv_files, namespace)?;

    std::fs::write(dest_path, rendered).map_err(|e| SpirvEmbedError::WriteOutput {
        path: dest_path.to_path_buf(),
        source: e,
    })?;

    info!(
        output = %dest_path.display(),
        arrays = spirv_files.len(),
        "wrote header"
    );
    Ok(dest_path.to_path_buf())
}
