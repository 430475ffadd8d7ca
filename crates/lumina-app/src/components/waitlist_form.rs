//! The email-capture form.

use dioxus::prelude::*;

use lumina_core::{SignupController, SignupPolicy, SimulatedGateway};

use crate::state::{ToastNotifier, WaitlistContext};

/// Kick off a submission attempt from the current form contents.
///
/// Validation happens synchronously; only an accepted attempt spawns the
/// (simulated) network call.
fn start_submit(ctx: WaitlistContext) {
    let input = ctx.form.peek().clone();
    let controller = SignupController::new(
        SimulatedGateway::default(),
        ToastNotifier(ctx.toasts),
        SignupPolicy::PRIMARY,
    );

    let mut view = ctx.view;
    let accepted = controller.begin(&input, &mut view.write());
    if !accepted {
        return;
    }

    spawn(async move {
        let result = controller.dispatch(&input).await;
        controller.finish(result, &mut view.write());
    });
}

#[component]
pub fn WaitlistForm() -> Element {
    let ctx = use_context::<WaitlistContext>();
    let is_submitting = ctx.view.read().is_submitting();
    let error_msg = ctx.view.read().error().map(|e| e.to_string());
    let mut form = ctx.form;

    rsx! {
        div { class: "waitlist-card",
            h2 { class: "card-title", "Secure Your Spot Today" }
            p { class: "card-subtitle", "Limited spots available for early access." }

            div { class: "form-fields",
                div { class: "field",
                    label { class: "field-label", "Full Name" }
                    input {
                        class: "field-input",
                        r#type: "text",
                        placeholder: "Enter your name",
                        autofocus: true,
                        disabled: is_submitting,
                        value: "{form.read().full_name}",
                        oninput: move |evt| form.write().full_name = evt.value(),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter && !is_submitting {
                                start_submit(ctx);
                            }
                        },
                    }
                }

                div { class: "field",
                    label { class: "field-label", "Email Address" }
                    input {
                        class: "field-input",
                        r#type: "email",
                        placeholder: "Enter your email",
                        disabled: is_submitting,
                        value: "{form.read().email}",
                        oninput: move |evt| form.write().email = evt.value(),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter && !is_submitting {
                                start_submit(ctx);
                            }
                        },
                    }
                }

                div { class: "field",
                    label { class: "field-label", "Startup Name" }
                    input {
                        class: "field-input",
                        r#type: "text",
                        placeholder: "Enter your startup name (optional)",
                        disabled: is_submitting,
                        value: "{form.read().startup_name}",
                        oninput: move |evt| form.write().startup_name = evt.value(),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter && !is_submitting {
                                start_submit(ctx);
                            }
                        },
                    }
                }
            }

            if let Some(err) = error_msg {
                p { class: "form-error", "{err}" }
            }

            p { class: "form-perks",
                "Join now for "
                strong { "exclusive perks" }
                " at launch!"
            }

            button {
                class: "btn-primary",
                disabled: is_submitting,
                onclick: move |_| start_submit(ctx),
                if is_submitting { "Joining..." } else { "Join the Waitlist" }
            }

            p { class: "form-terms", "By joining, you agree to our Terms & Privacy Policy." }
        }
    }
}
