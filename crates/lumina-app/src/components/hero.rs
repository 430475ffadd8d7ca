//! Hero section: headline, subtitle, and the social-proof counter line.

use dioxus::prelude::*;

use lumina_core::format_count;

use crate::state::WaitlistContext;

#[component]
pub fn Hero() -> Element {
    let ctx = use_context::<WaitlistContext>();
    let joined = format_count(ctx.counter.read().count());

    rsx! {
        div { class: "hero",
            h1 { class: "hero-title",
                "Join the Future of "
                span { class: "hero-accent", "Innovation" }
            }
            p { class: "hero-subtitle",
                "Be part of our exclusive community and get early access to revolutionary features."
            }
            p { class: "hero-proof",
                span { class: "hero-proof-count", "{joined}+" }
                " founders already in line"
            }
        }
    }
}
