use std::net::SocketAddr;
use std::path::PathBuf;

use crate::consent::script::AnalyticsConfig;
use crate::error::{SiteError, SiteResult};

pub const STORAGE_FILENAME: &str = "site-storage.json";

/// Crash-report sink settings. Absent when no DSN is configured.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub dsn: String,
    pub environment: String,
    pub release: String,
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub bind_addr: SocketAddr,
    pub data_dir: PathBuf,
    pub analytics: AnalyticsConfig,
    pub report: Option<ReportConfig>,
}

impl SiteConfig {
    /// Load from the environment, falling back to local defaults. A
    /// `.env` file is honored when present.
    pub fn from_env() -> SiteResult<Self> {
        let _ = dotenvy::dotenv();

        let bind_addr = match std::env::var("LICHTWERK_ADDR") {
            Ok(value) => value
                .parse()
                .map_err(|_| SiteError::Config(format!("invalid LICHTWERK_ADDR: {value}")))?,
            Err(_) => SocketAddr::from(([127, 0, 0, 1], 8080)),
        };

        let data_dir = std::env::var("LICHTWERK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("lichtwerk")
            });

        let analytics = AnalyticsConfig {
            script_url: env_or(
                "LICHTWERK_ANALYTICS_URL",
                "https://analytics.lichtwerk.dev/script.js",
            ),
            website_id: env_or(
                "LICHTWERK_WEBSITE_ID",
                "5f4c1c2e-4b7d-4f43-9adf-2a9c7f6b3d10",
            ),
        };

        let report = std::env::var("LICHTWERK_REPORT_DSN").ok().map(|dsn| ReportConfig {
            dsn,
            environment: env_or("LICHTWERK_ENV", "production"),
            release: format!("lichtwerk@{}", env!("CARGO_PKG_VERSION")),
        });

        Ok(SiteConfig {
            bind_addr,
            data_dir,
            analytics,
            report,
        })
    }

    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILENAME)
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_path_joins_data_dir() {
        let config = SiteConfig {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            data_dir: PathBuf::from("/tmp/lichtwerk-test"),
            analytics: AnalyticsConfig {
                script_url: "https://analytics.example.test/script.js".to_string(),
                website_id: "site-1234".to_string(),
            },
            report: None,
        };
        assert_eq!(
            config.storage_path(),
            PathBuf::from("/tmp/lichtwerk-test").join(STORAGE_FILENAME)
        );
    }

    #[test]
    fn env_or_falls_back_to_default() {
        assert_eq!(
            env_or("LICHTWERK_TEST_UNSET_VARIABLE", "fallback"),
            "fallback"
        );
    }
}
