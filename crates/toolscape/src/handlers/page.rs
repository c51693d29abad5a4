//! Landing page handler for `/`.

use axum::{extract::State, http::Uri, response::Html};

use toolscape_core::session::PageState;
use toolscape_critical::StyleCache;
use toolscape_pages::{render_page, RenderParams};

use crate::error::AppError;
use crate::state::AppState;

/// GET / - Render the landing page.
///
/// Builds a fresh style cache per request so extraction sees exactly the
/// rules this render inserted, then renders with the server-side default
/// state and wraps the result in the document shell.
#[axum::debug_handler]
pub async fn landing(State(state): State<AppState>, uri: Uri) -> Result<Html<String>, AppError> {
    let mut styles = StyleCache::new(&state.config.style_key)?;
    let params = RenderParams {
        url: uri.path().to_string(),
    };

    let document = render_page(
        &params,
        &PageState::default(),
        &state.catalog,
        &mut styles,
    )?;

    Ok(Html(document))
}
