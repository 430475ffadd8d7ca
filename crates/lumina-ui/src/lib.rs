//! Shared UI components for the Lumina landing page.
//!
//! Provides the theme system, the toast viewport, and the decorative
//! particle/confetti layers.

pub mod particles;
pub mod theme;
pub mod toast;

pub use particles::{ConfettiBurst, ConfettiSpec, ParticleBackground, ParticleSpec};
pub use theme::{Theme, ThemedRoot, CURRENT_THEME};
pub use toast::{Toast, ToastKind, ToastStack, ToastViewport};

/// Shared CSS containing design tokens, theme definitions, and base styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
