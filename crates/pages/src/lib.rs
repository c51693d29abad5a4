//! Page composition and rendering for the toolscape landing page.
//!
//! This crate provides:
//! - An element tree and serializer for building markup
//! - The components that make up the landing page
//! - The render pipeline: compose, serialize, extract the critical CSS,
//!   wrap in the document shell
//!
//! # Example
//!
//! ```
//! use toolscape_core::catalog::default_catalog;
//! use toolscape_core::session::PageState;
//! use toolscape_critical::StyleCache;
//! use toolscape_pages::{render_page, RenderParams};
//!
//! let mut styles = StyleCache::new("css").unwrap();
//! let document = render_page(
//!     &RenderParams::default(),
//!     &PageState::default(),
//!     &default_catalog(),
//!     &mut styles,
//! )
//! .unwrap();
//!
//! assert!(document.contains("window.__EMOTION_CRITICAL_CSS_IDS__"));
//! ```

pub mod components;
mod error;
mod markup;
mod page;
mod render;
mod shell;

pub use error::{PageError, Result};
pub use markup::{Element, Node};
pub use page::compose_page;
pub use render::{render_page, RenderParams};
pub use shell::shell;
