use std::sync::Arc;

use crate::consent::state::ConsentState;
use crate::storage::KeyValueStore;

/// Storage key holding the consent choice. The value domain is the
/// literal strings `"true"` / `"false"`; absence of the key means unset.
pub const CONSENT_KEY: &str = "cookie-consent";

/// An explicit consent decision.
///
/// `ConsentState::Unset` is not representable here: unset exists only by
/// key absence and can never be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentChoice {
    Granted,
    Denied,
}

impl ConsentChoice {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            ConsentChoice::Granted
        } else {
            ConsentChoice::Denied
        }
    }

    pub fn state(self) -> ConsentState {
        match self {
            ConsentChoice::Granted => ConsentState::Granted,
            ConsentChoice::Denied => ConsentState::Denied,
        }
    }

    fn as_stored(self) -> &'static str {
        match self {
            ConsentChoice::Granted => "true",
            ConsentChoice::Denied => "false",
        }
    }
}

/// Single source of truth for the consent choice.
#[derive(Clone)]
pub struct ConsentStore {
    backend: Arc<dyn KeyValueStore>,
}

impl ConsentStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        ConsentStore { backend }
    }

    /// Read the current choice.
    ///
    /// Storage failures degrade to `Unset`: the banner is re-offered and
    /// no third-party code loads.
    pub fn read(&self) -> ConsentState {
        match self.backend.get(CONSENT_KEY) {
            Ok(raw) => ConsentState::from_raw(raw.as_deref()),
            Err(error) => {
                tracing::warn!("consent storage read failed: {error}");
                ConsentState::Unset
            }
        }
    }

    /// Persist an explicit choice.
    ///
    /// Write failures are logged and swallowed; the choice is simply
    /// re-offered on the next visit.
    pub fn write(&self, choice: ConsentChoice) {
        if let Err(error) = self.backend.set(CONSENT_KEY, choice.as_stored()) {
            tracing::warn!("consent storage write failed: {error}");
        }
    }
}
