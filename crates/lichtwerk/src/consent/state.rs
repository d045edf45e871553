use serde::{Deserialize, Serialize};

/// The user's tracking-consent choice.
///
/// `Unset` exists only by absence of the storage key; it is never
/// written explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentState {
    Unset,
    Granted,
    Denied,
}

impl ConsentState {
    /// Decode the raw stored value. A missing key means no choice was
    /// made yet. Anything other than the literal `"true"` counts as
    /// denied, so corrupted data can never enable tracking.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None => ConsentState::Unset,
            Some("true") => ConsentState::Granted,
            Some(_) => ConsentState::Denied,
        }
    }

    pub fn is_granted(self) -> bool {
        self == ConsentState::Granted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_is_unset() {
        assert_eq!(ConsentState::from_raw(None), ConsentState::Unset);
    }

    #[test]
    fn true_literal_is_granted() {
        assert_eq!(ConsentState::from_raw(Some("true")), ConsentState::Granted);
    }

    #[test]
    fn false_literal_is_denied() {
        assert_eq!(ConsentState::from_raw(Some("false")), ConsentState::Denied);
    }

    #[test]
    fn unexpected_values_fail_closed() {
        assert_eq!(ConsentState::from_raw(Some("yes")), ConsentState::Denied);
        assert_eq!(ConsentState::from_raw(Some("TRUE")), ConsentState::Denied);
        assert_eq!(ConsentState::from_raw(Some("")), ConsentState::Denied);
    }

    #[test]
    fn only_granted_reports_granted() {
        assert!(ConsentState::Granted.is_granted());
        assert!(!ConsentState::Denied.is_granted());
        assert!(!ConsentState::Unset.is_granted());
    }
}
