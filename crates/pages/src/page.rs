//! Whole-page composition.

use toolscape_core::catalog::ToolCategory;
use toolscape_core::session::PageState;
use toolscape_critical::StyleCache;

use crate::components::{
    build_footer, build_header, build_hero, build_section, build_sub_hero, PageContext,
};
use crate::markup::{Element, Node};

/// Base document styles, inserted globally so extraction always keeps them.
const GLOBAL_RESET: &str = "html,body{width:100%;padding:0;margin:0;background:#FFF;font-family:avenir next,avenir,helvetica neue,helvetica,ubuntu,roboto,noto,segoe ui,arial,sans-serif;font-weight:400;color:#444;-webkit-font-smoothing:antialiased;-moz-osx-font-smoothing:grayscale}*{box-sizing:border-box}#app{width:100%}";

/// Composes the full page tree for one request.
///
/// Renders the header, hero, sub-hero, one section per catalog category in
/// listing order, and the footer, all inside the `#app` container under the
/// theme the page state names.
pub fn compose_page(
    state: &PageState,
    catalog: &[ToolCategory],
    styles: &mut StyleCache,
) -> Node {
    styles.insert_global(GLOBAL_RESET);

    let theme = state.theme.resolve();
    let mut ctx = PageContext {
        theme: &theme,
        styles,
    };

    let mut app = Element::new("div")
        .attr("id", "app")
        .child(build_header(&mut ctx, state))
        .child(build_hero(&mut ctx))
        .child(build_sub_hero(&mut ctx));
    for category in catalog {
        app = app.child(build_section(&mut ctx, category, state.horizontal_scroll));
    }
    app.child(build_footer(&mut ctx)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolscape_core::catalog::default_catalog;
    use toolscape_critical::extract_critical;

    #[test]
    fn test_page_blocks_appear_in_order() {
        let mut styles = StyleCache::new("css").unwrap();
        let catalog = default_catalog();
        let html = compose_page(&PageState::default(), &catalog, &mut styles).render_to_string();

        let header = html.find("<header").unwrap();
        let first_section = html.find("<section").unwrap();
        let footer = html.find("<footer").unwrap();
        assert!(html.starts_with("<div id=\"app\""));
        assert!(header < first_section);
        assert!(first_section < footer);
    }

    #[test]
    fn test_one_section_per_category() {
        let mut styles = StyleCache::new("css").unwrap();
        let catalog = default_catalog();
        let html = compose_page(&PageState::default(), &catalog, &mut styles).render_to_string();

        assert_eq!(html.matches("<section").count(), catalog.len());
    }

    #[test]
    fn test_global_reset_is_always_critical() {
        let mut styles = StyleCache::new("css").unwrap();
        let html = compose_page(&PageState::default(), &[], &mut styles).render_to_string();

        let critical = extract_critical(html, &styles);
        assert!(critical.css.contains("box-sizing:border-box"));
    }

    #[test]
    fn test_empty_catalog_renders_no_sections() {
        let mut styles = StyleCache::new("css").unwrap();
        let html = compose_page(&PageState::default(), &[], &mut styles).render_to_string();

        assert!(!html.contains("<section"));
        assert!(html.contains("<header"));
        assert!(html.contains("<footer"));
    }
}
