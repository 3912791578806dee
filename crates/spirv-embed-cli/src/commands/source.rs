use std::path::Path;

use anyhow::{Context, Result};

use spirv_embed_core::source;

use crate::output;

/// Embed one word list as `<dest_dir>/<file>.cpp`.
pub fn run(src_path: &Path, dest_dir: &Path, namespace: &str) -> Result<()> {
    let out = source::generate_source(src_path, dest_dir, namespace)
        .with_context(|| format!("generating source for {}", src_path.display()))?;

    output::print_success(&format!("Wrote {}", out.display()));
    Ok(())
}
