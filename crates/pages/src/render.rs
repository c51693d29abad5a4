//! The request-scoped render pipeline.

use toolscape_core::catalog::ToolCategory;
use toolscape_core::session::PageState;
use toolscape_critical::{extract_critical, StyleCache};

use crate::error::Result;
use crate::page::compose_page;
use crate::shell::shell;

/// Per-request render parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderParams {
    /// Request path. Reserved for routing; currently informational.
    pub url: String,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            url: "/".to_string(),
        }
    }
}

/// Renders the complete document for one request.
///
/// Composes the page tree, serializes it to markup, extracts the critical
/// CSS that markup needs and wraps everything in the document shell.
pub fn render_page(
    params: &RenderParams,
    state: &PageState,
    catalog: &[ToolCategory],
    styles: &mut StyleCache,
) -> Result<String> {
    tracing::debug!(url = %params.url, theme = state.theme.as_str(), "rendering page");

    let tree = compose_page(state, catalog, styles);
    let html = tree.render_to_string();
    let critical = extract_critical(html, styles);
    shell(&critical.html, &critical.ids, &critical.css)
}
