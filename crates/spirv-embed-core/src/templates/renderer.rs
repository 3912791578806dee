//! Handlebars-based renderer for the generated C++ files.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled, so a
//! `{{variable}}` missing from the data context is an error instead of an empty
//! string. HTML escaping is turned off: the output is C++, and word lists or
//! namespaces are inserted verbatim.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::templates::{embedded, renderer::TemplateRenderer};
//!
//! let renderer = TemplateRenderer::new();
//! let data = serde_json::json!({ "var_name": "foo_spv" });
//! let decl = renderer.render(embedded::HEADER_DECLARATION, &data)?;
//! ```

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{Result, SpirvEmbedError};

/// Template renderer for generated source and header files.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode on and escaping off.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| SpirvEmbedError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::embedded;

    #[test]
    fn test_render_declaration() {
        let renderer = TemplateRenderer::new();
        let data = serde_json::json!({ "var_name": "a_spv" });
        let out = renderer.render(embedded::HEADER_DECLARATION, &data).unwrap();
        assert_eq!(
            out,
            "extern const uint32_t a_spv[];\nextern const size_t a_spv_count;"
        );
    }

    #[test]
    fn test_strict_mode_rejects_missing_variable() {
        let renderer = TemplateRenderer::new();
        let data = serde_json::json!({});
        let err = renderer
            .render(embedded::HEADER_DECLARATION, &data)
            .unwrap_err();
        assert!(matches!(err, SpirvEmbedError::TemplateRender(_)));
    }

    #[test]
    fn test_no_html_escaping() {
        let renderer = TemplateRenderer::new();
        let data = serde_json::json!({ "content": "a < b && c > d, \"e\"" });
        let out = renderer.render("{{content}}", &data).unwrap();
        assert_eq!(out, "a < b && c > d, \"e\"");
    }
}
