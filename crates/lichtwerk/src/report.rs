//! Crash reporting to a Sentry-compatible sink.
//!
//! The consent subsystem never calls this; it exists for process-level
//! failures. Without a configured DSN every capture is a no-op, and a
//! failed delivery is logged rather than raised.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::config::ReportConfig;
use crate::error::{SiteError, SiteResult};

/// Parsed data source name, e.g. `https://<key>@errors.example.de/1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dsn {
    public_key: String,
    base_url: String,
    project_id: String,
}

impl Dsn {
    pub fn parse(raw: &str) -> SiteResult<Self> {
        let invalid = || SiteError::Config(format!("invalid report DSN: {raw}"));
        let (scheme, rest) = raw.split_once("://").ok_or_else(invalid)?;
        let (key, host_and_project) = rest.split_once('@').ok_or_else(invalid)?;
        let (host, project) = host_and_project.rsplit_once('/').ok_or_else(invalid)?;
        if scheme.is_empty() || key.is_empty() || host.is_empty() || project.is_empty() {
            return Err(invalid());
        }
        Ok(Dsn {
            public_key: key.to_string(),
            base_url: format!("{scheme}://{host}"),
            project_id: project.to_string(),
        })
    }

    fn store_url(&self) -> String {
        format!("{}/api/{}/store/", self.base_url, self.project_id)
    }

    fn auth_header(&self) -> String {
        format!(
            "Sentry sentry_version=7, sentry_client=lichtwerk/{}, sentry_key={}",
            env!("CARGO_PKG_VERSION"),
            self.public_key
        )
    }
}

/// Forwards crashes to the configured sink.
pub struct ErrorReporter {
    dsn: Option<Dsn>,
    environment: String,
    release: String,
}

impl ErrorReporter {
    pub fn new(config: Option<&ReportConfig>) -> Self {
        let default_release = format!("lichtwerk@{}", env!("CARGO_PKG_VERSION"));
        match config {
            Some(config) => match Dsn::parse(&config.dsn) {
                Ok(dsn) => ErrorReporter {
                    dsn: Some(dsn),
                    environment: config.environment.clone(),
                    release: config.release.clone(),
                },
                Err(error) => {
                    tracing::warn!("crash reporting disabled: {error}");
                    ErrorReporter {
                        dsn: None,
                        environment: config.environment.clone(),
                        release: config.release.clone(),
                    }
                }
            },
            None => ErrorReporter {
                dsn: None,
                environment: "production".to_string(),
                release: default_release,
            },
        }
    }

    pub fn enabled(&self) -> bool {
        self.dsn.is_some()
    }

    /// Report a crash. Best effort and synchronous: failures are logged,
    /// never raised. Call from plain threads only (the panic hook spawns
    /// one).
    pub fn capture_message(&self, level: &str, message: &str) {
        let Some(dsn) = &self.dsn else {
            return;
        };
        let payload = self.payload(level, message);
        let client = match reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
        {
            Ok(client) => client,
            Err(error) => {
                tracing::warn!("crash report client unavailable: {error}");
                return;
            }
        };
        let result = client
            .post(dsn.store_url())
            .header("X-Sentry-Auth", dsn.auth_header())
            .json(&payload)
            .send();
        if let Err(error) = result {
            tracing::warn!("crash report delivery failed: {error}");
        }
    }

    fn payload(&self, level: &str, message: &str) -> serde_json::Value {
        json!({
            "event_id": Uuid::new_v4().simple().to_string(),
            "timestamp": Utc::now().to_rfc3339(),
            "platform": "native",
            "level": level,
            "release": self.release,
            "environment": self.environment,
            "message": message,
        })
    }
}

/// Route process panics to the sink before the default hook runs.
pub fn install_panic_hook(reporter: Arc<ErrorReporter>) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let message = info.to_string();
        let reporter = reporter.clone();
        // A fresh thread keeps the blocking HTTP client off any async
        // runtime worker that may be unwinding.
        let delivery = std::thread::spawn(move || reporter.capture_message("fatal", &message));
        let _ = delivery.join();
        default_hook(info);
    }));
}
