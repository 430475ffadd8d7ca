//! Lumina waitlist landing page.
//!
//! Re-exports components and state for embedding in other shells.

pub mod components;
pub mod state;

/// Page-specific CSS layered on top of the shared tokens.
pub const APP_CSS: &str = include_str!("../assets/styles.css");
