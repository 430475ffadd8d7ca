//! Lumina waitlist core: signup flow logic shared by the landing page.
//!
//! Everything UI-independent lives here: field validators, the submission
//! state machine, the simulated signup gateway, the notifier seam, and the
//! cosmetic join counter.

pub mod counter;
pub mod error;
pub mod form;
pub mod gateway;
pub mod notify;
pub mod submit;
pub mod validate;

pub use counter::{JoinCounter, format_count, JOIN_COUNT_SEED, JOIN_TICK_INTERVAL};
pub use error::{GatewayError, SignupError};
pub use form::{FormInput, SignupPolicy};
pub use gateway::{SignupGateway, SimulatedGateway, SUBMIT_DELAY};
pub use notify::{Notifier, TracingNotifier};
pub use submit::{SignupController, SignupView, SUCCESS_MESSAGE};
pub use validate::{validate_email, validate_linkedin};
