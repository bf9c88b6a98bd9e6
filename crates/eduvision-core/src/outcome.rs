//! Request outcome state published by the coordinator.

use serde::{Deserialize, Serialize};

/// The single piece of session state observed by the presentation layer.
///
/// Transitions:
///
/// ```text
/// Idle --submit(valid)--> InFlight --success--> Succeeded
///                         InFlight --empty/failure--> Failed
/// Idle --submit(invalid)--> Failed
/// any --reset--> Idle
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum RequestOutcome {
    /// Nothing requested yet, or the last result was dismissed.
    #[default]
    Idle,
    /// A request has been accepted and the model call is outstanding.
    InFlight,
    /// The model returned non-blank text.
    Succeeded(String),
    /// The request failed; the message is ready to show to the user.
    Failed(String),
}

impl RequestOutcome {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// True once a request has resolved, successfully or not.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed(_))
    }

    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Succeeded(text) => Some(text),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let ok = RequestOutcome::Succeeded("answer".into());
        assert_eq!(ok.output(), Some("answer"));
        assert_eq!(ok.error(), None);
        assert!(ok.is_terminal());

        let failed = RequestOutcome::Failed("boom".into());
        assert_eq!(failed.error(), Some("boom"));
        assert!(failed.is_terminal());

        assert!(!RequestOutcome::InFlight.is_terminal());
        assert!(RequestOutcome::default().is_idle());
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let json = serde_json::to_value(RequestOutcome::Failed("nope".into())).unwrap();
        assert_eq!(json["type"], "Failed");
        assert_eq!(json["data"], "nope");

        let idle = serde_json::to_value(RequestOutcome::Idle).unwrap();
        assert_eq!(idle["type"], "Idle");
    }
}
