use std::time::{Duration, Instant};

use crate::bus::Bus;
use crate::consent::script::{ScriptHost, ScriptLoader};
use crate::consent::state::ConsentState;
use crate::consent::store::{ConsentChoice, ConsentStore};
use crate::event::SiteEvent;

/// How long the "settings saved" acknowledgement stays visible.
pub const SAVE_ACK_TTL: Duration = Duration::from_secs(3);

/// A cookie category row on the settings page.
#[derive(Debug, Clone, Copy)]
pub struct CookieCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub always_on: bool,
    pub description: &'static str,
}

/// The two categories shown on the settings page.
///
/// The consent key itself is required infrastructure, so the essential
/// category has no toggle. Its copy documents the key and the 12-month
/// expiry the client platform applies to it.
pub fn cookie_categories() -> [CookieCategory; 2] {
    [
        CookieCategory {
            id: "essential",
            name: "Essential",
            always_on: true,
            description: "Required for basic site function and cannot be \
                disabled. Stores only the cookie-consent entry holding your \
                choice, kept by your browser for 12 months.",
        },
        CookieCategory {
            id: "analytics",
            name: "Analytics",
            always_on: false,
            description: "Helps us understand how visitors interact with the \
                site. All data is collected anonymized by a self-hosted \
                service; nothing is shared with third parties.",
        },
    ]
}

/// Settings-page controller.
///
/// Toggling is pure UI state; nothing is persisted until an explicit
/// save.
#[derive(Debug)]
pub struct SettingsPage {
    analytics_enabled: bool,
    saved_at: Option<Instant>,
}

impl SettingsPage {
    /// Mount from the stored state, treating an unset choice as off, and
    /// reconcile the document with an already-made choice.
    pub fn mount(store: &ConsentStore, loader: &ScriptLoader, host: &dyn ScriptHost) -> Self {
        let state = store.read();
        match state {
            ConsentState::Granted => loader.ensure_loaded(host),
            ConsentState::Denied => loader.ensure_removed(host),
            ConsentState::Unset => {}
        }
        SettingsPage {
            analytics_enabled: state.is_granted(),
            saved_at: None,
        }
    }

    pub fn analytics_enabled(&self) -> bool {
        self.analytics_enabled
    }

    /// Pure UI mutation; no side effect until [`SettingsPage::save`].
    pub fn set_analytics(&mut self, enabled: bool) {
        self.analytics_enabled = enabled;
    }

    /// Persist the toggle, align the document with it, and signal other
    /// open views to re-read the store.
    pub fn save(
        &mut self,
        store: &ConsentStore,
        loader: &ScriptLoader,
        host: &dyn ScriptHost,
        bus: &Bus,
    ) {
        store.write(ConsentChoice::from_enabled(self.analytics_enabled));
        if self.analytics_enabled {
            loader.ensure_loaded(host);
        } else {
            loader.ensure_removed(host);
        }
        bus.publish(SiteEvent::ConsentChanged);
        self.saved_at = Some(Instant::now());
    }

    /// Whether the save acknowledgement is still visible at `now`.
    pub fn ack_visible(&self, now: Instant) -> bool {
        self.saved_at
            .is_some_and(|saved_at| now.duration_since(saved_at) < SAVE_ACK_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consent::script::{AnalyticsConfig, DocumentHead};
    use crate::consent::store::CONSENT_KEY;
    use crate::storage::{KeyValueStore, MemoryStore};
    use std::sync::Arc;

    fn fixture() -> (ConsentStore, ScriptLoader, DocumentHead, Arc<MemoryStore>, Bus) {
        let backend = Arc::new(MemoryStore::new());
        let store = ConsentStore::new(backend.clone());
        let loader = ScriptLoader::new(AnalyticsConfig {
            script_url: "https://analytics.example.test/script.js".to_string(),
            website_id: "site-1234".to_string(),
        });
        (store, loader, DocumentHead::new(), backend, Bus::new(8))
    }

    #[test]
    fn unset_choice_mounts_with_toggle_off() {
        let (store, loader, head, _, _) = fixture();
        let page = SettingsPage::mount(&store, &loader, &head);

        assert!(!page.analytics_enabled());
        assert!(head.tags().is_empty());
    }

    #[test]
    fn prior_grant_mounts_on_and_restores_script() {
        let (store, loader, head, backend, _) = fixture();
        backend.set(CONSENT_KEY, "true").expect("set");

        let page = SettingsPage::mount(&store, &loader, &head);

        assert!(page.analytics_enabled());
        assert_eq!(head.tags().len(), 1);
    }

    #[test]
    fn toggle_alone_has_no_side_effect() {
        let (store, loader, head, backend, _) = fixture();
        let mut page = SettingsPage::mount(&store, &loader, &head);

        page.set_analytics(true);

        assert_eq!(backend.get(CONSENT_KEY), Ok(None));
        assert!(head.tags().is_empty());
    }

    #[test]
    fn save_enables_analytics_end_to_end() {
        let (store, loader, head, backend, bus) = fixture();
        let mut rx = bus.subscribe();
        backend.set(CONSENT_KEY, "false").expect("set");

        let mut page = SettingsPage::mount(&store, &loader, &head);
        assert!(!page.analytics_enabled());

        page.set_analytics(true);
        page.save(&store, &loader, &head, &bus);

        assert_eq!(backend.get(CONSENT_KEY), Ok(Some("true".to_string())));
        assert!(loader.is_loaded(&head));
        assert_eq!(rx.try_recv(), Ok(SiteEvent::ConsentChanged));
    }

    #[test]
    fn save_disables_analytics_end_to_end() {
        let (store, loader, head, backend, bus) = fixture();
        backend.set(CONSENT_KEY, "true").expect("set");

        let mut page = SettingsPage::mount(&store, &loader, &head);
        page.set_analytics(false);
        page.save(&store, &loader, &head, &bus);

        assert_eq!(backend.get(CONSENT_KEY), Ok(Some("false".to_string())));
        assert!(!loader.is_loaded(&head));
    }

    #[test]
    fn script_state_tracks_consent_across_toggle_sequences() {
        let (store, loader, head, _, bus) = fixture();
        let mut page = SettingsPage::mount(&store, &loader, &head);

        for enabled in [true, false, false, true, true, false] {
            page.set_analytics(enabled);
            page.save(&store, &loader, &head, &bus);
            assert_eq!(loader.is_loaded(&head), enabled);
            assert_eq!(store.read().is_granted(), enabled);
        }
    }

    #[test]
    fn ack_appears_on_save_and_expires() {
        let (store, loader, head, _, bus) = fixture();
        let mut page = SettingsPage::mount(&store, &loader, &head);
        let now = Instant::now();

        assert!(!page.ack_visible(now));

        page.save(&store, &loader, &head, &bus);

        assert!(page.ack_visible(Instant::now()));
        assert!(!page.ack_visible(Instant::now() + SAVE_ACK_TTL));
    }
}
