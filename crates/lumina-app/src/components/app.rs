//! Root page component: decorative layers, hero, feature grid, and the
//! form/success switch.

use dioxus::prelude::*;
use tokio::time::sleep;

use lumina_core::JOIN_TICK_INTERVAL;
use lumina_ui::{ParticleBackground, ThemedRoot, ToastViewport};

use crate::state::WaitlistContext;

use super::features::FeatureGrid;
use super::hero::Hero;
use super::success_card::SuccessCard;
use super::waitlist_form::WaitlistForm;

/// Root application component.
#[component]
pub fn App() -> Element {
    let ctx = use_context_provider(WaitlistContext::new);

    // Join counter ticker. Sleeps first so a tick never lands before the
    // page has painted; stops for good once the signup went through. The
    // task dies with the component, so teardown cancels it.
    let _ticker = use_future(move || async move {
        let mut counter = ctx.counter;
        loop {
            sleep(JOIN_TICK_INTERVAL).await;
            if ctx.view.read().is_submitted() {
                break;
            }
            counter.write().tick(&mut rand::rng());
        }
        tracing::debug!("join counter frozen");
    });

    let submitted = ctx.view.read().is_submitted();

    rsx! {
        ThemedRoot {
            div { class: "landing",
                ParticleBackground {}

                div { class: "landing-content",
                    Hero {}
                    FeatureGrid {}

                    if submitted {
                        SuccessCard {}
                    } else {
                        WaitlistForm {}
                    }
                }

                ToastViewport { stack: ctx.toasts }
            }
        }
    }
}
