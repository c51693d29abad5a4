use toolscape_core::catalog::ToolCategory;

use crate::markup::{Element, Node};

use super::{build_card_scroll, PageContext};

/// Builds one titled section containing a category's card list.
pub fn build_section(
    ctx: &mut PageContext,
    category: &ToolCategory,
    horizontal_scroll: bool,
) -> Node {
    let block = ctx.styles.insert(&format!(
        "padding:48px 24px;background:{}",
        ctx.theme.background_primary
    ));
    let heading = ctx.styles.insert(&format!(
        "margin:0;font-size:32px;color:{}",
        ctx.theme.primary
    ));
    let sub_heading = ctx.styles.insert(&format!(
        "margin:8px 0 24px;font-size:18px;color:{}",
        ctx.theme.tertiary
    ));

    Element::new("section")
        .class(block)
        .child(Element::new("h2").class(heading).text(&category.title))
        .child(
            Element::new("p")
                .class(sub_heading)
                .text(&category.subtitle),
        )
        .child(build_card_scroll(ctx, &category.tools, horizontal_scroll))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolscape_core::catalog::ToolEntry;
    use toolscape_core::theme::PRIMARY;
    use toolscape_critical::StyleCache;

    #[test]
    fn test_section_renders_headings_and_cards() {
        let mut styles = StyleCache::new("css").unwrap();
        let mut ctx = PageContext {
            theme: &PRIMARY,
            styles: &mut styles,
        };
        let category = ToolCategory::new("Bundlers", "Package your code.").with_tool(
            ToolEntry::new("webpack", "A bundler.", "https://webpack.js.org"),
        );

        let html = build_section(&mut ctx, &category, true).render_to_string();

        assert!(html.contains("<h2"));
        assert!(html.contains("Bundlers"));
        assert!(html.contains("Package your code."));
        assert!(html.contains("webpack"));
    }
}
