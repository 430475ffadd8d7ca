//! The submission seam.
//!
//! There is no backend. The production gateway stands in for a network call
//! with a fixed delay; fake implementations drive the failure branch.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::form::FormInput;

/// Fixed delay the simulated submission takes to resolve.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Asynchronous capability that accepts a signup.
#[async_trait]
pub trait SignupGateway: Send + Sync {
    async fn submit(&self, entry: &FormInput) -> Result<(), GatewayError>;
}

/// Gateway that pretends to talk to a backend: sleeps for a fixed interval,
/// logs the payload a real call would carry, and always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(SUBMIT_DELAY)
    }
}

#[async_trait]
impl SignupGateway for SimulatedGateway {
    async fn submit(&self, entry: &FormInput) -> Result<(), GatewayError> {
        match serde_json::to_string(entry) {
            Ok(body) => tracing::debug!(%body, "simulated signup request"),
            Err(e) => tracing::warn!("failed to serialize signup payload: {}", e),
        }
        tokio::time::sleep(self.delay).await;
        tracing::info!(email = %entry.email, "simulated signup accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_gateway_resolves_ok_after_delay() {
        let gateway = SimulatedGateway::default();
        let entry = FormInput {
            full_name: "Ada".into(),
            email: "ada@lumina.dev".into(),
            ..Default::default()
        };

        let started = tokio::time::Instant::now();
        let result = gateway.submit(&entry).await;

        assert_eq!(result, Ok(()));
        assert_eq!(started.elapsed(), SUBMIT_DELAY);
    }
}
