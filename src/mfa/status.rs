use serde::Serialize;
use std::fmt;

/// Result handed to the RADIUS layer: Access-Accept, Access-Reject or
/// Access-Challenge carrying the state to echo back with the OTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "state", rename_all = "lowercase")]
pub enum Outcome {
    Accept,
    Reject,
    Challenge(String),
}

impl Outcome {
    /// Opaque state to round-trip into `verify`, only present on a challenge.
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        match self {
            Self::Challenge(state) => Some(state),
            Self::Accept | Self::Reject => None,
        }
    }

    /// `Accept` and `Reject` end the attempt, `Challenge` needs another round.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Challenge(_))
    }

    #[must_use]
    pub const fn is_accept(&self) -> bool {
        matches!(self, Self::Accept)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accept => f.write_str("accept"),
            Self::Reject => f.write_str("reject"),
            Self::Challenge(state) => write!(f, "challenge({state})"),
        }
    }
}

/// Request status reported by the verification API in `Model.Status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteStatus {
    Granted,
    Denied,
    AwaitingAuthentication,
    Other(String),
}

impl RemoteStatus {
    /// Status names are matched exactly; anything else is kept verbatim for logging.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Granted" => Self::Granted,
            "Denied" => Self::Denied,
            "AwaitingAuthentication" => Self::AwaitingAuthentication,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

/// Map a remote status onto an [`Outcome`].
///
/// Unknown statuses deny; a future API state must never read as success.
#[must_use]
pub fn outcome_for(status: &RemoteStatus, request_id: &str) -> Outcome {
    match status {
        RemoteStatus::Granted => Outcome::Accept,
        RemoteStatus::AwaitingAuthentication => Outcome::Challenge(request_id.to_string()),
        RemoteStatus::Denied | RemoteStatus::Other(_) => Outcome::Reject,
    }
}
