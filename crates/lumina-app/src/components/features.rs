//! Static feature grid.

use dioxus::prelude::*;

struct Feature {
    title: &'static str,
    description: &'static str,
    accent: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Priority Access",
        description: "Be among the first to experience our platform",
        accent: "feature-violet",
    },
    Feature {
        title: "Exclusive Benefits",
        description: "Get special perks reserved for early adopters",
        accent: "feature-blue",
    },
    Feature {
        title: "Founder Updates",
        description: "Direct insights into our development journey",
        accent: "feature-indigo",
    },
];

#[component]
pub fn FeatureGrid() -> Element {
    rsx! {
        div { class: "feature-grid",
            for feature in FEATURES.iter() {
                div {
                    key: "{feature.title}",
                    class: "feature-card {feature.accent}",
                    h3 { class: "feature-title", "{feature.title}" }
                    p { class: "feature-desc", "{feature.description}" }
                }
            }
        }
    }
}
