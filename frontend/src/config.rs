use chrono_tz::Tz;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::Asia::Jakarta;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// One layer of runtime configuration. Layers come from `window.__GESANG_ENV`
/// (written by `env.js`), `window.__GESANG_CONFIG` and `./config.json`, in
/// that order of precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "TIME_ZONE")]
    pub time_zone: Option<String>,
    #[serde(default, alias = "LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl RuntimeConfig {
    /// Fills unset keys of `self` from `fallback`.
    pub fn or(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: non_blank(self.api_base_url).or(non_blank(fallback.api_base_url)),
            time_zone: non_blank(self.time_zone).or(non_blank(fallback.time_zone)),
            log_level: non_blank(self.log_level).or(non_blank(fallback.log_level)),
        }
    }

    fn is_complete(&self) -> bool {
        self.api_base_url.is_some() && self.time_zone.is_some() && self.log_level.is_some()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub time_zone: Tz,
    pub log_level: LevelFilter,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            time_zone: DEFAULT_TIME_ZONE,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ResolvedConfig {
    pub fn from_layers(layers: impl IntoIterator<Item = RuntimeConfig>) -> Self {
        let merged = layers
            .into_iter()
            .fold(RuntimeConfig::default(), RuntimeConfig::or);
        let defaults = ResolvedConfig::default();

        let time_zone = match merged.time_zone.as_deref().map(str::trim) {
            Some(name) => name.parse::<Tz>().unwrap_or_else(|_| {
                log::warn!("unknown time zone {:?}, using {}", name, DEFAULT_TIME_ZONE);
                DEFAULT_TIME_ZONE
            }),
            None => defaults.time_zone,
        };
        let log_level = match merged.log_level.as_deref().map(str::trim) {
            Some(level) => level.parse::<LevelFilter>().unwrap_or(DEFAULT_LOG_LEVEL),
            None => defaults.log_level,
        };
        let api_base_url = merged
            .api_base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);

        Self {
            api_base_url,
            time_zone,
            log_level,
        }
    }
}

static RESOLVED: OnceLock<ResolvedConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use wasm_bindgen::JsValue;

    pub fn read_global(name: &str) -> Option<RuntimeConfig> {
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        let json = js_sys::JSON::stringify(&value).ok()?.as_string()?;
        serde_json::from_str(&json).ok()
    }

    pub async fn fetch_config_json() -> Option<RuntimeConfig> {
        let origin = web_sys::window()?.location().origin().ok()?;
        let url = format!("{}/config.json", origin.trim_end_matches('/'));
        let response = reqwest::get(&url).await.ok()?;
        if !response.status().is_success() {
            return None;
        }
        response.json::<RuntimeConfig>().await.ok()
    }
}

fn global_layers() -> RuntimeConfig {
    #[cfg(target_arch = "wasm32")]
    {
        let env = browser::read_global("__GESANG_ENV").unwrap_or_default();
        let config = browser::read_global("__GESANG_CONFIG").unwrap_or_default();
        env.or(config)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        RuntimeConfig::default()
    }
}

async fn fetch_config_json() -> Option<RuntimeConfig> {
    #[cfg(target_arch = "wasm32")]
    {
        browser::fetch_config_json().await
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Resolves the runtime configuration once; later calls return the cached value.
pub async fn resolve() -> &'static ResolvedConfig {
    if let Some(cached) = RESOLVED.get() {
        return cached;
    }
    let globals = global_layers();
    let file = if globals.is_complete() {
        RuntimeConfig::default()
    } else {
        fetch_config_json().await.unwrap_or_default()
    };
    let resolved = ResolvedConfig::from_layers([globals, file]);
    RESOLVED.get_or_init(|| resolved)
}

pub async fn await_api_base_url() -> String {
    resolve().await.api_base_url.clone()
}

/// Time zone used for clocks and attendance timestamps. Before the async
/// resolution finishes, globals set by `env.js` are still honoured.
pub fn current_time_zone() -> Tz {
    match RESOLVED.get() {
        Some(config) => config.time_zone,
        None => ResolvedConfig::from_layers([global_layers()]).time_zone,
    }
}

pub async fn init() -> LevelFilter {
    let config = resolve().await;
    log::debug!(
        "runtime config: api={} tz={} log={}",
        config.api_base_url,
        config.time_zone,
        config.log_level
    );
    config.log_level
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(api: Option<&str>, tz: Option<&str>, level: Option<&str>) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: api.map(str::to_string),
            time_zone: tz.map(str::to_string),
            log_level: level.map(str::to_string),
        }
    }

    #[test]
    fn earlier_layers_win_per_key() {
        let resolved = ResolvedConfig::from_layers([
            layer(Some("https://absensi.example/api/"), None, None),
            layer(Some("http://ignored/api"), Some("Asia/Makassar"), None),
            layer(None, Some("UTC"), Some("debug")),
        ]);
        assert_eq!(resolved.api_base_url, "https://absensi.example/api");
        assert_eq!(resolved.time_zone, chrono_tz::Asia::Makassar);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
    }

    #[test]
    fn blank_and_invalid_values_fall_back_to_defaults() {
        let resolved =
            ResolvedConfig::from_layers([layer(Some("  "), Some("Mars/Base"), Some("loud"))]);
        assert_eq!(resolved, ResolvedConfig::default());
        assert_eq!(resolved.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(resolved.time_zone, chrono_tz::Asia::Jakarta);
    }

    #[test]
    fn env_js_keys_may_be_upper_case() {
        let parsed: RuntimeConfig = serde_json::from_str(
            r#"{"API_BASE_URL":"https://absensi.example/api","TIME_ZONE":"Asia/Jakarta"}"#,
        )
        .unwrap();
        assert_eq!(
            parsed.api_base_url.as_deref(),
            Some("https://absensi.example/api")
        );
        assert_eq!(parsed.time_zone.as_deref(), Some("Asia/Jakarta"));
        assert!(!parsed.is_complete());
    }
}
