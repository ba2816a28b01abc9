//! Second-factor orchestration.
//!
//! Leaves first: [`cache`] keeps recently authenticated client/user pairs,
//! [`status`] maps remote statuses onto [`Outcome`], [`transport`] speaks the
//! remote verification API and [`orchestrator`] composes them.

pub mod cache;
pub mod orchestrator;
pub mod status;
pub mod transport;

pub use self::cache::BypassCache;
pub use self::orchestrator::SecondFactor;
pub use self::status::{Outcome, RemoteStatus};
pub use self::transport::VerificationTransport;

/// Endpoint that starts a second-factor request (push or OTP delivery).
pub const INITIATE_PATH: &str = "/access/requests/ra";

/// Endpoint that confirms a pending request with the code entered by the user.
pub const CHALLENGE_PATH: &str = "/access/requests/ra/challenge";
