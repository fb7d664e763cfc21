use reqwest::Client;
use std::{env, path::PathBuf, sync::Arc, time::Duration};
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub http: Client,
    pub upstreams: Arc<Upstreams>,
}

/// Base URLs and credentials for the three upstream APIs.
///
/// A `None` here means the value was never configured; every call that
/// needs it is refused before a request is built.
#[derive(Clone, Debug, Default)]
pub struct Upstreams {
    pub country_api_url: Option<String>,
    pub meal_db_url: Option<String>,
    pub weather_api_url: Option<String>,
    pub weather_api_key: Option<String>,
}

pub struct AppConfig {
    pub port: u16,
    pub external_timeout_ms: u64,
    pub static_dir: PathBuf,
    pub upstreams: Upstreams,
}

/// Reads an optional setting. Blank values and the literal `null` count as unset.
fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|v| configured(&v))
}

pub(crate) fn configured(raw: &str) -> Option<String> {
    let v = raw.trim();
    if v.is_empty() || v.eq_ignore_ascii_case("null") {
        None
    } else {
        Some(v.to_string())
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let port: u16 = env::var("PORT").unwrap_or_else(|_| "7070".into()).parse()?;
        let external_timeout_ms: u64 = env::var("EXTERNAL_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(12_000);
        let static_dir = PathBuf::from(env::var("STATIC_DIR").unwrap_or_else(|_| "public".into()));
        let upstreams = Upstreams {
            country_api_url: optional_var("COUNTRY_API_URL"),
            meal_db_url: optional_var("MEAL_DB_URL"),
            weather_api_url: optional_var("WEATHER_API_URL"),
            weather_api_key: optional_var("WEATHER_API_KEY"),
        };
        Ok(Self { port, external_timeout_ms, static_dir, upstreams })
    }

    /// Logs every upstream setting that is absent. The service still starts.
    pub fn warn_missing(&self) {
        let u = &self.upstreams;
        let settings = [
            ("COUNTRY_API_URL", u.country_api_url.is_some()),
            ("MEAL_DB_URL", u.meal_db_url.is_some()),
            ("WEATHER_API_URL", u.weather_api_url.is_some()),
            ("WEATHER_API_KEY", u.weather_api_key.is_some()),
        ];
        for (key, present) in settings {
            if !present {
                warn!("{key} is not set; lookups that need it will be skipped");
            }
        }
        info!(
            country_api = u.country_api_url.as_deref().unwrap_or("-"),
            "configuration loaded"
        );
    }

    pub fn build_state(&self) -> Result<AppState, anyhow::Error> {
        // one pooled client; the timeout bounds every upstream call
        let http = Client::builder()
            .timeout(Duration::from_millis(self.external_timeout_ms))
            .build()?;

        Ok(AppState {
            http,
            upstreams: Arc::new(self.upstreams.clone()),
        })
    }
}
