//! Second-factor orchestration for one RADIUS authentication attempt.
//!
//! State machine, driven by repeated RADIUS requests from the same client:
//!
//! ```text
//! New ──begin──> Accept | Reject | Challenge(state)
//!  └──bypass──> Accept
//! Challenge(state) ──verify──> Accept | Reject | Challenge(state')
//! ```
//!
//! `Accept` and `Reject` are terminal. How many challenge rounds a client may
//! go through is up to the RADIUS layer; nothing here loops or retries.

use crate::mfa::{
    BypassCache, CHALLENGE_PATH, INITIATE_PATH, Outcome, VerificationTransport,
    transport::{ChallengeRequest, InitiateRequest},
};
use std::{sync::Arc, time::Duration};
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct SecondFactor {
    transport: VerificationTransport,
    cache: Arc<BypassCache>,
    bypass_window: Option<Duration>,
}

impl SecondFactor {
    /// A `None` or zero `bypass_window` disables the bypass entirely.
    #[must_use]
    pub fn new(
        transport: VerificationTransport,
        cache: Arc<BypassCache>,
        bypass_window: Option<Duration>,
    ) -> Self {
        Self {
            transport,
            cache,
            bypass_window: bypass_window.filter(|window| !window.is_zero()),
        }
    }

    #[must_use]
    pub fn bypass_window(&self) -> Option<Duration> {
        self.bypass_window
    }

    #[must_use]
    pub fn cache(&self) -> &Arc<BypassCache> {
        &self.cache
    }

    /// Start the second factor for a user whose first factor succeeded.
    ///
    /// A pair accepted within the bypass window is accepted again without a
    /// network call. Otherwise the API decides; on `Accept` the pair anchors a
    /// new bypass window. A `Challenge` carries the state the RADIUS layer has
    /// to hand back to [`Self::verify`].
    #[instrument(skip(self, user_phone))]
    pub async fn begin(
        &self,
        remote_host: Option<&str>,
        user_name: &str,
        user_phone: Option<&str>,
    ) -> Outcome {
        let remote_host = remote_host.unwrap_or_default();

        if let Some(window) = self.bypass_window
            && self.cache.probe(remote_host, user_name, window)
        {
            info!(
                "second factor bypassed for {} from {}, authenticated within {} minutes",
                user_name,
                remote_host,
                window.as_secs() / 60
            );

            return Outcome::Accept;
        }

        let request = InitiateRequest {
            identity: user_name,
            phone: user_phone,
        };
        let outcome = self.transport.send(INITIATE_PATH, &request).await;

        if outcome.is_accept() && self.bypass_window.is_some() {
            self.cache.record(remote_host, user_name);
        }

        info!("second factor for {}: {}", user_name, outcome);

        outcome
    }

    /// Confirm a pending challenge with the code the user entered.
    ///
    /// The API may answer with yet another challenge; it is returned as is.
    #[instrument(skip(self, otp_code))]
    pub async fn verify(&self, user_name: &str, otp_code: &str, state: &str) -> Outcome {
        let request = ChallengeRequest {
            identity: user_name,
            challenge: otp_code,
            request_id: state,
        };
        let outcome = self.transport.send(CHALLENGE_PATH, &request).await;

        info!("challenge verification for {}: {}", user_name, outcome);

        outcome
    }
}
