//! Domain types for the toolscape landing page.
//!
//! This crate provides:
//! - The two fixed color themes and their resolution by name
//! - The tool catalog the page renders as sections
//! - Per-session page state with client storage persistence

pub mod catalog;
pub mod session;
pub mod theme;
