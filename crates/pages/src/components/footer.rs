use crate::markup::{Element, Node};

use super::PageContext;

/// Builds the page footer.
pub fn build_footer(ctx: &mut PageContext) -> Node {
    let bar = ctx.styles.insert(&format!(
        "padding:32px 24px;text-align:center;background:{};color:{}",
        ctx.theme.background_secondary, ctx.theme.secondary
    ));
    let link = ctx.styles.insert(&format!(
        "color:{};text-decoration:underline",
        ctx.theme.secondary
    ));

    Element::new("footer")
        .class(bar)
        .text("Built for people who build the web. ")
        .child(
            Element::new("a")
                .class(link)
                .attr("href", "https://github.com/toolscape/toolscape")
                .text("Source"),
        )
        .into()
}
