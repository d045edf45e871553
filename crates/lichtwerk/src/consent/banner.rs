use crate::consent::script::{ScriptHost, ScriptLoader};
use crate::consent::state::ConsentState;
use crate::consent::store::{ConsentChoice, ConsentStore};

/// Lifecycle of the first-visit prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerPhase {
    Hidden,
    PromptVisible,
    Resolved,
}

/// First-visit consent prompt.
///
/// The prompt stays up until the user acts; there is no
/// dismiss-without-choosing, so closing the tab leaves the choice unset
/// and the banner reappears on the next visit.
#[derive(Debug)]
pub struct ConsentBanner {
    phase: BannerPhase,
}

impl ConsentBanner {
    /// Mount the banner against the current stored state.
    ///
    /// A previously granted choice re-injects the script here: storage
    /// persists across page loads, script tags do not.
    pub fn mount(store: &ConsentStore, loader: &ScriptLoader, host: &dyn ScriptHost) -> Self {
        let phase = match store.read() {
            ConsentState::Unset => BannerPhase::PromptVisible,
            ConsentState::Granted => {
                loader.ensure_loaded(host);
                BannerPhase::Hidden
            }
            ConsentState::Denied => BannerPhase::Hidden,
        };
        ConsentBanner { phase }
    }

    pub fn phase(&self) -> BannerPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == BannerPhase::PromptVisible
    }

    /// Accept all: persist the grant, inject the script, hide the prompt.
    pub fn accept(&mut self, store: &ConsentStore, loader: &ScriptLoader, host: &dyn ScriptHost) {
        store.write(ConsentChoice::Granted);
        loader.ensure_loaded(host);
        self.phase = BannerPhase::Resolved;
    }

    /// Essential only: persist the denial, drop the script, hide the
    /// prompt.
    pub fn reject(&mut self, store: &ConsentStore, loader: &ScriptLoader, host: &dyn ScriptHost) {
        store.write(ConsentChoice::Denied);
        loader.ensure_removed(host);
        self.phase = BannerPhase::Resolved;
    }
}
