// Theme system for Dioxus Desktop
//
// Uses a wrapper div with data-theme attribute instead of web_sys
// since this is a desktop application.

use dioxus::prelude::*;

/// Available themes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Midnight,
    Light,
}

impl Theme {
    /// CSS data-theme attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Midnight => "midnight",
            Theme::Light => "light",
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Midnight => "Midnight",
            Theme::Light => "Light",
        }
    }
}

/// Global theme signal - use this throughout your app
pub static CURRENT_THEME: GlobalSignal<Theme> = Signal::global(Theme::default);

/// Themed wrapper component - wraps children with data-theme attribute
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            "data-theme": theme.as_str(),
            style: "min-height: 100vh; width: 100%;",
            {children}
        }
    }
}
