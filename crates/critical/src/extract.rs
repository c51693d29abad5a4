//! Critical-CSS extraction over rendered markup.

use std::collections::HashSet;

use crate::cache::StyleCache;

/// Output of a critical-CSS pass: the untouched input markup, the rule
/// identifiers it needs, and their concatenated rule text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    /// The input markup, byte for byte.
    pub html: String,
    /// Identifiers of the emitted rules, unique, in cache insertion order.
    pub ids: Vec<String>,
    /// Concatenated rule text for exactly the identifiers in `ids`.
    pub css: String,
}

/// Computes the style rules a rendered page actually needs.
///
/// Scans `html` for `<key>-<id>` class markers, then walks the cache's
/// inserted rules in insertion order. A rule is emitted when the markup
/// references it or when no `registered` entry exists for it (global rules
/// are inserted without registration and ride on that default) - unless it
/// was already flushed to the client, in which case it is skipped even if
/// referenced. The cache itself is never modified; marking rules flushed
/// happens during client hydration, not here.
pub fn extract_critical(html: String, cache: &StyleCache) -> ExtractionResult {
    let (ids, css) = critical_rules(&html, cache);
    ExtractionResult { html, ids, css }
}

/// Walks the cache in insertion order and keeps every rule the markup
/// references, plus every rule that was never registered under a class name.
fn critical_rules(html: &str, cache: &StyleCache) -> (Vec<String>, String) {
    let mut seen: HashSet<&str> = HashSet::new();
    for captures in cache.marker.captures_iter(html) {
        if let Some(id) = captures.get(1) {
            seen.insert(id.as_str());
        }
    }

    let mut ids = Vec::new();
    let mut css = String::new();
    for (id, rule) in cache.inserted() {
        let class = format!("{}-{}", cache.key(), id);
        if !seen.contains(id) && cache.is_registered(&class) {
            continue;
        }
        if let Some(text) = rule.css() {
            ids.push(id.to_string());
            css.push_str(text);
        }
    }

    (ids, css)
}
