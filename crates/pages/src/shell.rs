use askama::Template;

use crate::error::Result;

/// The outer HTML document.
#[derive(Template)]
#[template(path = "shell.html")]
struct ShellTemplate<'a> {
    css: &'a str,
    html: &'a str,
    ids: String,
}

/// Wraps rendered markup in the document shell.
///
/// The shell carries the critical CSS in a `<style>` element, the markup in
/// a container `<div>` and a script assigning the JSON-encoded identifier
/// list to `window.__EMOTION_CRITICAL_CSS_IDS__`, where the client-side
/// hydration step picks it up.
pub fn shell(html: &str, ids: &[String], css: &str) -> Result<String> {
    let ids = serde_json::to_string(ids)?;
    let template = ShellTemplate { css, html, ids };
    Ok(template.render()?)
}
