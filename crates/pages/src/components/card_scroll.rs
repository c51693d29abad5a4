use toolscape_core::catalog::ToolEntry;

use crate::markup::{Element, Node};

use super::PageContext;

/// Builds the card list for one category.
///
/// The horizontal layout lays cards out in one scrollable row; the
/// vertical layout stacks them full width.
pub fn build_card_scroll(
    ctx: &mut PageContext,
    tools: &[ToolEntry],
    horizontal_scroll: bool,
) -> Node {
    let list = if horizontal_scroll {
        ctx.styles.insert(
            "display:flex;flex-direction:row;gap:16px;overflow-x:auto;margin:0;padding:0 0 8px;list-style:none",
        )
    } else {
        ctx.styles
            .insert("display:flex;flex-direction:column;gap:16px;margin:0;padding:0;list-style:none")
    };

    let mut scroll = Element::new("ul").class(list);
    for tool in tools {
        scroll = scroll.child(build_card(ctx, tool, horizontal_scroll));
    }
    scroll.into()
}

fn build_card(ctx: &mut PageContext, tool: &ToolEntry, horizontal_scroll: bool) -> Node {
    let width = if horizontal_scroll { "flex:0 0 280px" } else { "flex:1 1 auto" };
    let card = ctx.styles.insert(&format!(
        "{width};padding:20px;border:1px solid {};border-radius:8px;background:{}",
        ctx.theme.border, ctx.theme.background_primary
    ));
    let name = ctx.styles.insert(&format!(
        "margin:0 0 8px;font-size:20px;color:{}",
        ctx.theme.tertiary
    ));
    let blurb = ctx.styles.insert(&format!(
        "margin:0 0 12px;color:{}",
        ctx.theme.primary
    ));
    let link = ctx.styles.insert(&format!(
        "color:{};text-decoration:none",
        ctx.theme.tertiary
    ));

    Element::new("li")
        .class(card)
        .child(Element::new("h3").class(name).text(&tool.name))
        .child(Element::new("p").class(blurb).text(&tool.description))
        .child(
            Element::new("a")
                .class(link)
                .attr("href", &tool.url)
                .text("Visit site"),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolscape_core::theme::PRIMARY;
    use toolscape_critical::StyleCache;

    fn sample_tools() -> Vec<ToolEntry> {
        vec![
            ToolEntry::new("webpack", "A bundler.", "https://webpack.js.org"),
            ToolEntry::new("Rollup", "Another bundler.", "https://rollupjs.org"),
        ]
    }

    fn render(horizontal_scroll: bool) -> String {
        let mut styles = StyleCache::new("css").unwrap();
        let mut ctx = PageContext {
            theme: &PRIMARY,
            styles: &mut styles,
        };
        build_card_scroll(&mut ctx, &sample_tools(), horizontal_scroll).render_to_string()
    }

    #[test]
    fn test_renders_one_card_per_tool() {
        let html = render(true);
        assert_eq!(html.matches("<li").count(), 2);
        assert!(html.contains("href=\"https://webpack.js.org\""));
        assert!(html.contains("href=\"https://rollupjs.org\""));
    }

    #[test]
    fn test_layouts_produce_distinct_markup() {
        assert_ne!(render(true), render(false));
    }
}
