use crate::markup::{Element, Node};

use super::PageContext;

/// Builds the hero banner.
pub fn build_hero(ctx: &mut PageContext) -> Node {
    let banner = ctx.styles.insert(&format!(
        "padding:96px 24px;text-align:center;background:{}",
        ctx.theme.background_secondary
    ));
    let title = ctx.styles.insert(&format!(
        "margin:0;font-size:56px;font-weight:700;color:{}",
        ctx.theme.primary_inverse
    ));

    Element::new("div")
        .class(banner)
        .child(Element::new("h2").class(title).text("Find your next tool"))
        .into()
}

/// Builds the strapline under the hero.
pub fn build_sub_hero(ctx: &mut PageContext) -> Node {
    let strap = ctx.styles.insert(&format!(
        "padding:32px 24px;text-align:center;font-size:20px;color:{}",
        ctx.theme.primary
    ));

    Element::new("div")
        .class(strap)
        .text("A hand-picked directory of the tools that build the web.")
        .into()
}
