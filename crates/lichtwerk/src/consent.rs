//! Cookie-consent subsystem: store, script loader, and the two view
//! controllers (first-visit banner, settings page).
//!
//! The collaborators carry no rendering concern and are unit-tested
//! against in-memory backends; the HTTP layer only adapts them to pages.

pub mod banner;
pub mod script;
pub mod settings;
pub mod state;
pub mod store;

pub use banner::{BannerPhase, ConsentBanner};
pub use script::{AnalyticsConfig, DetachedHost, DocumentHead, ScriptHost, ScriptLoader, ScriptTag};
pub use settings::{cookie_categories, CookieCategory, SettingsPage, SAVE_ACK_TTL};
pub use state::ConsentState;
pub use store::{ConsentChoice, ConsentStore, CONSENT_KEY};
