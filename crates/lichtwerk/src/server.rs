use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};

use crate::bus::Bus;
use crate::config::SiteConfig;
use crate::consent::{ConsentStore, ScriptLoader};
use crate::content::SiteContent;
use crate::storage::FileStore;

pub mod consent;
pub mod error;
pub mod events;
pub mod pages;

pub struct Server {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    state: Arc<ServerState>,
}

pub(crate) struct ServerState {
    pub(crate) store: ConsentStore,
    pub(crate) loader: ScriptLoader,
    pub(crate) bus: Bus,
    pub(crate) content: SiteContent,
}

impl Server {
    /// Bind and serve in the background. The configured bind address may
    /// use port 0 to pick a free port (tests do).
    pub async fn start(config: SiteConfig) -> Result<Self, String> {
        let backend = Arc::new(FileStore::new(config.storage_path()));
        let state = Arc::new(ServerState {
            store: ConsentStore::new(backend),
            loader: ScriptLoader::new(config.analytics.clone()),
            bus: Bus::default(),
            content: SiteContent::new(),
        });
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        let app = Router::new()
            .route("/health", get(health))
            .route("/", get(pages::home))
            .route("/imprint", get(pages::imprint))
            .route(
                "/cookie-settings",
                get(pages::cookie_settings).post(consent::save_settings),
            )
            .route("/consent/accept", post(consent::accept))
            .route("/consent/reject", post(consent::reject))
            .route("/api/consent", get(consent::current))
            .route("/api/events", get(events::stream_events))
            .fallback(not_found)
            .with_state(state.clone())
            .layer(cors);
        let listener = TcpListener::bind(config.bind_addr)
            .await
            .map_err(|error| error.to_string())?;
        let addr = listener.local_addr().map_err(|error| error.to_string())?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        tracing::info!("site listening on {addr}");
        Ok(Server {
            addr,
            shutdown: Some(shutdown_tx),
            state,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(&mut self) -> Result<(), String> {
        if let Some(sender) = self.shutdown.take() {
            sender
                .send(())
                .map_err(|_| "failed to send server shutdown signal".to_string())
        } else {
            Ok(())
        }
    }

    pub(crate) fn state(&self) -> &Arc<ServerState> {
        &self.state
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> error::ApiError {
    error::ApiError::not_found("no such page")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consent::script::AnalyticsConfig;
    use crate::consent::CONSENT_KEY;
    use crate::storage::KeyValueStore;
    use crate::SiteEvent;
    use std::path::Path;
    use tempfile::tempdir;

    fn test_config(data_dir: &Path) -> SiteConfig {
        SiteConfig {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            data_dir: data_dir.to_path_buf(),
            analytics: AnalyticsConfig {
                script_url: "https://analytics.example.test/script.js".to_string(),
                website_id: "site-1234".to_string(),
            },
            report: None,
        }
    }

    #[tokio::test]
    async fn start_binds_random_port_and_serves_health() {
        let dir = tempdir().expect("tempdir");
        let mut server = Server::start(test_config(dir.path())).await.expect("start");
        let addr = server.addr();
        assert_ne!(addr.port(), 0);

        let body = reqwest::get(format!("http://{addr}/health"))
            .await
            .expect("request")
            .text()
            .await
            .expect("body");
        assert_eq!(body, "ok");
        server.shutdown().expect("shutdown");
    }

    #[tokio::test]
    async fn fresh_visit_shows_banner_without_script() {
        let dir = tempdir().expect("tempdir");
        let server = Server::start(test_config(dir.path())).await.expect("start");

        let body = reqwest::get(format!("http://{}/", server.addr()))
            .await
            .expect("request")
            .text()
            .await
            .expect("body");

        assert!(body.contains("Cookie settings"));
        assert!(body.contains("/consent/accept"));
        assert!(!body.contains("data-website-id"));
    }

    #[tokio::test]
    async fn accept_persists_and_injects_script_on_next_render() {
        let dir = tempdir().expect("tempdir");
        let server = Server::start(test_config(dir.path())).await.expect("start");
        let base = format!("http://{}", server.addr());
        let client = reqwest::Client::new();

        client
            .post(format!("{base}/consent/accept"))
            .send()
            .await
            .expect("accept");

        let body = client
            .get(format!("{base}/"))
            .send()
            .await
            .expect("request")
            .text()
            .await
            .expect("body");

        assert!(body.contains("data-website-id=\"site-1234\""));
        assert!(!body.contains("/consent/accept"));
        assert_eq!(
            server.state().store.read(),
            crate::consent::ConsentState::Granted
        );
    }

    #[tokio::test]
    async fn reject_persists_denial_and_keeps_script_out() {
        let dir = tempdir().expect("tempdir");
        let server = Server::start(test_config(dir.path())).await.expect("start");
        let base = format!("http://{}", server.addr());
        let client = reqwest::Client::new();

        client
            .post(format!("{base}/consent/reject"))
            .send()
            .await
            .expect("reject");

        let body = client
            .get(format!("{base}/"))
            .send()
            .await
            .expect("request")
            .text()
            .await
            .expect("body");

        assert!(!body.contains("data-website-id"));
        assert!(!body.contains("/consent/accept"));
    }

    #[tokio::test]
    async fn settings_save_writes_key_and_emits_one_signal() {
        let dir = tempdir().expect("tempdir");
        let server = Server::start(test_config(dir.path())).await.expect("start");
        let base = format!("http://{}", server.addr());
        let mut rx = server.state().bus.subscribe();
        let client = reqwest::Client::new();

        client
            .post(format!("{base}/cookie-settings"))
            .form(&[("analytics", "on")])
            .send()
            .await
            .expect("save");

        let backend = FileStore::new(test_config(dir.path()).storage_path());
        assert_eq!(backend.get(CONSENT_KEY), Ok(Some("true".to_string())));
        assert_eq!(rx.try_recv(), Ok(SiteEvent::ConsentChanged));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn settings_page_reflects_stored_choice() {
        let dir = tempdir().expect("tempdir");
        let config = test_config(dir.path());
        FileStore::new(config.storage_path())
            .set(CONSENT_KEY, "true")
            .expect("seed");
        let server = Server::start(config).await.expect("start");

        let body = reqwest::get(format!("http://{}/cookie-settings", server.addr()))
            .await
            .expect("request")
            .text()
            .await
            .expect("body");

        assert!(body.contains("name=\"analytics\" checked"));
    }

    #[tokio::test]
    async fn consent_api_reports_current_state() {
        let dir = tempdir().expect("tempdir");
        let server = Server::start(test_config(dir.path())).await.expect("start");
        let base = format!("http://{}", server.addr());
        let client = reqwest::Client::new();

        let unset: serde_json::Value = client
            .get(format!("{base}/api/consent"))
            .send()
            .await
            .expect("request")
            .json()
            .await
            .expect("json");
        assert_eq!(unset["state"], "unset");

        client
            .post(format!("{base}/consent/accept"))
            .send()
            .await
            .expect("accept");

        let granted: serde_json::Value = client
            .get(format!("{base}/api/consent"))
            .send()
            .await
            .expect("request")
            .json()
            .await
            .expect("json");
        assert_eq!(granted["state"], "granted");
    }

    #[tokio::test]
    async fn unknown_route_returns_error_envelope() {
        let dir = tempdir().expect("tempdir");
        let server = Server::start(test_config(dir.path())).await.expect("start");

        let response = reqwest::get(format!("http://{}/no-such-page", server.addr()))
            .await
            .expect("request");
        assert_eq!(response.status(), 404);

        let body: serde_json::Value = response.json().await.expect("json");
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"]["code"], "not_found");
    }
}
