//! # radius-mfa (Second-Factor Orchestrator)
//!
//! `radius-mfa` decides, for each RADIUS authentication attempt that already
//! passed the first factor, whether a second factor must be challenged. It talks
//! to a remote verification API to request or confirm that factor and hands a
//! closed [`mfa::Outcome`] back to the RADIUS protocol layer.
//!
//! ## Flow
//!
//! 1. **Begin:** the RADIUS layer calls [`mfa::SecondFactor::begin`]. A client/user
//!    pair that fully authenticated within the configured bypass window is
//!    accepted straight from the [`mfa::BypassCache`]. Everything else goes to
//!    `POST /access/requests/ra`.
//! 2. **Challenge:** an `AwaitingAuthentication` answer becomes
//!    [`mfa::Outcome::Challenge`]. Its state (the remote request id) travels in the
//!    RADIUS `State` attribute and comes back with the OTP.
//! 3. **Verify:** [`mfa::SecondFactor::verify`] posts the OTP to
//!    `POST /access/requests/ra/challenge` and returns whatever the API decided.
//!
//! ## Fail-Closed
//!
//! Every ambiguity resolves to [`mfa::Outcome::Reject`]: unreachable API, TLS
//! errors, timeouts, non-2xx answers, malformed bodies, `Success: false` and
//! statuses this build does not know. Failure detail goes to the logs only; the
//! RADIUS client sees an Access-Reject.
//!
//! ## Transport Security
//!
//! Requests authenticate with HTTP Basic (`nas_identifier:shared_secret`) and the
//! client refuses to negotiate anything older than TLS 1.2.

pub mod cli;
pub mod mfa;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
