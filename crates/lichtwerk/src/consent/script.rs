use std::sync::Mutex;

/// One analytics script element, identified by its website-id attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTag {
    pub src: String,
    pub website_id: String,
    pub defer: bool,
}

/// Collector endpoint and site identifier for the analytics script.
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    pub script_url: String,
    pub website_id: String,
}

impl AnalyticsConfig {
    fn tag(&self) -> ScriptTag {
        ScriptTag {
            src: self.script_url.clone(),
            website_id: self.website_id.clone(),
            defer: true,
        }
    }
}

/// The document seam the loader manipulates.
///
/// Detection always matches on the website-id attribute, never on tag
/// position, so redundant calls stay idempotent.
pub trait ScriptHost: Send + Sync {
    fn contains(&self, website_id: &str) -> bool;
    fn append(&self, tag: ScriptTag);
    fn remove(&self, website_id: &str) -> bool;
}

/// In-memory document head: an ordered list of script tags.
#[derive(Debug, Default)]
pub struct DocumentHead {
    tags: Mutex<Vec<ScriptTag>>,
}

impl DocumentHead {
    pub fn new() -> Self {
        DocumentHead::default()
    }

    /// Snapshot of the current tags, in insertion order.
    pub fn tags(&self) -> Vec<ScriptTag> {
        self.tags.lock().map(|tags| tags.clone()).unwrap_or_default()
    }
}

impl ScriptHost for DocumentHead {
    fn contains(&self, website_id: &str) -> bool {
        self.tags
            .lock()
            .map(|tags| tags.iter().any(|tag| tag.website_id == website_id))
            .unwrap_or(false)
    }

    fn append(&self, tag: ScriptTag) {
        if let Ok(mut tags) = self.tags.lock() {
            tags.push(tag);
        }
    }

    fn remove(&self, website_id: &str) -> bool {
        match self.tags.lock() {
            Ok(mut tags) => {
                let before = tags.len();
                tags.retain(|tag| tag.website_id != website_id);
                tags.len() != before
            }
            Err(_) => false,
        }
    }
}

/// Stand-in host for contexts with no document.
///
/// Every operation is a no-op so consent logic stays safe to run during
/// non-interactive rendering.
pub struct DetachedHost;

impl ScriptHost for DetachedHost {
    fn contains(&self, _website_id: &str) -> bool {
        false
    }

    fn append(&self, _tag: ScriptTag) {}

    fn remove(&self, _website_id: &str) -> bool {
        false
    }
}

/// Enforces "script tag present exactly when consent is granted".
#[derive(Clone)]
pub struct ScriptLoader {
    config: AnalyticsConfig,
}

impl ScriptLoader {
    pub fn new(config: AnalyticsConfig) -> Self {
        ScriptLoader { config }
    }

    /// Inject the script tag unless one is already present.
    pub fn ensure_loaded(&self, host: &dyn ScriptHost) {
        if host.contains(&self.config.website_id) {
            return;
        }
        host.append(self.config.tag());
    }

    /// Remove the script tag if present.
    pub fn ensure_removed(&self, host: &dyn ScriptHost) {
        host.remove(&self.config.website_id);
    }

    pub fn is_loaded(&self, host: &dyn ScriptHost) -> bool {
        host.contains(&self.config.website_id)
    }
}
