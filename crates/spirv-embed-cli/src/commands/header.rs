use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use spirv_embed_core::header;

use crate::output;

/// Write the aggregate header declaring every file in `spirv_files`.
pub fn run(spirv_files: &[PathBuf], dest_path: &Path, namespace: &str) -> Result<()> {
    let out = header::generate_header(spirv_files, dest_path, namespace)
        .with_context(|| format!("generating header {}", dest_path.display()))?;

    output::print_success(&format!(
        "Wrote {} ({} declarations)",
        out.display(),
        spirv_files.len()
    ));
    Ok(())
}
