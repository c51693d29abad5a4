use toolscape_core::session::PageState;
use toolscape_core::theme::ThemeName;

use crate::markup::{Element, Node};

use super::PageContext;

/// Builds the page header: logo plus the layout and theme toggles.
///
/// The layout toggle reads checked when cards stack vertically; the theme
/// toggle reads checked on the secondary theme.
pub fn build_header(ctx: &mut PageContext, state: &PageState) -> Node {
    let bar = ctx.styles.insert(&format!(
        "display:flex;align-items:center;justify-content:space-between;padding:16px 24px;background:{}",
        ctx.theme.background_secondary
    ));
    let logo = ctx.styles.insert(&format!(
        "margin:0;font-size:24px;font-weight:700;color:{}",
        ctx.theme.logo
    ));
    let controls = ctx.styles.insert(&format!(
        "display:flex;gap:24px;color:{}",
        ctx.theme.secondary
    ));
    let toggle = ctx
        .styles
        .insert("display:flex;align-items:center;gap:8px;cursor:pointer");

    let list_toggle = toggle_input("list-toggle", !state.horizontal_scroll);
    let theme_toggle = toggle_input("theme-toggle", state.theme == ThemeName::Secondary);

    Element::new("header")
        .class(bar)
        .child(Element::new("h1").class(logo).text("Toolscape"))
        .child(
            Element::new("nav")
                .class(controls)
                .child(labeled_toggle(toggle.clone(), list_toggle, "List view"))
                .child(labeled_toggle(toggle, theme_toggle, "Theme")),
        )
        .into()
}

fn toggle_input(id: &str, checked: bool) -> Element {
    let input = Element::new("input")
        .attr("type", "checkbox")
        .attr("id", id);
    if checked {
        input.flag("checked")
    } else {
        input
    }
}

fn labeled_toggle(class: String, input: Element, caption: &str) -> Element {
    Element::new("label").class(class).child(input).text(caption)
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolscape_core::theme::PRIMARY;
    use toolscape_critical::StyleCache;

    fn render(state: &PageState) -> String {
        let mut styles = StyleCache::new("css").unwrap();
        let mut ctx = PageContext {
            theme: &PRIMARY,
            styles: &mut styles,
        };
        build_header(&mut ctx, state).render_to_string()
    }

    #[test]
    fn test_default_state_leaves_toggles_unchecked() {
        let html = render(&PageState::default());
        assert!(!html.contains("checked"));
    }

    #[test]
    fn test_vertical_layout_checks_the_list_toggle() {
        let state = PageState {
            horizontal_scroll: false,
            ..PageState::default()
        };
        let html = render(&state);
        assert!(html.contains("id=\"list-toggle\" checked"));
        assert!(!html.contains("id=\"theme-toggle\" checked"));
    }

    #[test]
    fn test_secondary_theme_checks_the_theme_toggle() {
        let state = PageState {
            theme: ThemeName::Secondary,
            ..PageState::default()
        };
        let html = render(&state);
        assert!(html.contains("id=\"theme-toggle\" checked"));
        assert!(!html.contains("id=\"list-toggle\" checked"));
    }
}
