//! Page components, one build function per visual block.

mod card_scroll;
mod footer;
mod header;
mod hero;
mod section;

pub use card_scroll::build_card_scroll;
pub use footer::build_footer;
pub use header::build_header;
pub use hero::{build_hero, build_sub_hero};
pub use section::build_section;

use toolscape_core::theme::Theme;
use toolscape_critical::StyleCache;

/// Context threaded through every component build function.
pub struct PageContext<'a> {
    /// The resolved palette for this render.
    pub theme: &'a Theme,
    /// Collects each component's style rules as they build.
    pub styles: &'a mut StyleCache,
}
