//! Pure critical-CSS logic - no I/O, no async, no side effects.
//!
//! This crate provides:
//! - A style cache that registers declaration blocks under hashed class names
//! - Global rule insertion and client-side hydration bookkeeping
//! - Extraction of the minimal CSS a rendered page needs
//!
//! # Example
//!
//! ```
//! use toolscape_critical::{extract_critical, StyleCache};
//!
//! // Build a cache with a validated key prefix
//! let mut cache = StyleCache::new("css").unwrap();
//!
//! // Register a declaration block; the class name encodes the key
//! let class = cache.insert("color:hotpink");
//! assert!(class.starts_with("css-"));
//!
//! // Extract only the rules the markup references
//! let html = format!("<div class=\"{class}\">hi</div>");
//! let result = extract_critical(html, &cache);
//! assert_eq!(result.ids.len(), 1);
//! assert!(result.css.contains("color:hotpink"));
//! ```

mod cache;
mod error;
mod extract;

pub use cache::{InsertedRule, StyleCache, DEFAULT_KEY};
pub use error::{Result, StyleError};
pub use extract::{extract_critical, ExtractionResult};
