use crate::mfa::{BypassCache, SecondFactor, VerificationTransport, transport::DEFAULT_API_TIMEOUT};
use anyhow::Result;
use secrecy::SecretString;
use std::{fmt, sync::Arc, time::Duration};

/// Settings shared by every action.
#[derive(Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub nas_identifier: String,
    pub shared_secret: SecretString,
    pub bypass_period_minutes: u32,
    pub api_timeout: Duration,
    pub allow_insecure_http: bool,
}

impl fmt::Debug for GlobalArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobalArgs")
            .field("api_url", &self.api_url)
            .field("nas_identifier", &self.nas_identifier)
            .field("shared_secret", &"[REDACTED]")
            .field("bypass_period_minutes", &self.bypass_period_minutes)
            .field("api_timeout", &self.api_timeout)
            .field("allow_insecure_http", &self.allow_insecure_http)
            .finish()
    }
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String, nas_identifier: String, shared_secret: SecretString) -> Self {
        Self {
            api_url,
            nas_identifier,
            shared_secret,
            bypass_period_minutes: 0,
            api_timeout: DEFAULT_API_TIMEOUT,
            allow_insecure_http: false,
        }
    }

    /// `None` when the bypass is disabled (a period of zero minutes).
    #[must_use]
    pub fn bypass_window(&self) -> Option<Duration> {
        match self.bypass_period_minutes {
            0 => None,
            minutes => Some(Duration::from_secs(u64::from(minutes) * 60)),
        }
    }

    /// Plain http is refused unless `allow_insecure_http` is set.
    ///
    /// # Errors
    /// Returns an error if the API URL is invalid or the HTTP client cannot be built.
    pub fn transport(&self) -> Result<VerificationTransport> {
        if self.allow_insecure_http {
            VerificationTransport::new_insecure(
                &self.api_url,
                &self.nas_identifier,
                &self.shared_secret,
                self.api_timeout,
            )
        } else {
            VerificationTransport::new(
                &self.api_url,
                &self.nas_identifier,
                &self.shared_secret,
                self.api_timeout,
            )
        }
    }

    /// # Errors
    /// Returns an error if the transport cannot be built.
    pub fn second_factor(&self, cache: Arc<BypassCache>) -> Result<SecondFactor> {
        Ok(SecondFactor::new(
            self.transport()?,
            cache,
            self.bypass_window(),
        ))
    }
}
