//! Confirmation view shown once the signup went through.

use dioxus::prelude::*;

use lumina_ui::ConfettiBurst;

/// Pre-templated share intent. Fire-and-forget: the webview hands
/// `target="_blank"` navigations to the system browser.
const SHARE_URL: &str = "https://twitter.com/intent/tweet?text=Just+joined+the+waitlist!";

#[component]
pub fn SuccessCard() -> Element {
    rsx! {
        div { class: "success-card",
            ConfettiBurst {}

            div { class: "success-badge",
                svg {
                    class: "success-check",
                    fill: "none",
                    stroke: "currentColor",
                    view_box: "0 0 24 24",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M5 13l4 4L19 7",
                    }
                }
            }

            h2 { class: "card-title", "Welcome Aboard! 🎉" }
            p { class: "card-subtitle",
                "You've secured your spot on the waitlist. Get ready for an amazing journey!"
            }

            a {
                class: "btn-primary btn-share",
                href: SHARE_URL,
                target: "_blank",
                rel: "noopener noreferrer",
                "Share with Friends"
            }
        }
    }
}
