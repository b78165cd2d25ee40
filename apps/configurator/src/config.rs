use std::{collections::HashMap, fs, path::Path};

use anyhow::{bail, Context};
use client_core::DEFAULT_ENDPOINT;
use url::Url;

pub const SETTINGS_FILE: &str = "configurator.toml";
const CONFIGURE_PATH: &str = "/configure";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            log_filter: "info".into(),
        }
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then `path` (flat TOML string table), then environment overrides.
pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("endpoint") {
                settings.endpoint = v.clone();
            }
            if let Some(v) = file_cfg.get("log_filter") {
                settings.log_filter = v.clone();
            }
        }
    }

    if let Some(v) = env("CONFIGURATOR_ENDPOINT") {
        settings.endpoint = v;
    }
    if let Some(v) = env("APP__ENDPOINT") {
        settings.endpoint = v;
    }

    if let Some(v) = env("CONFIGURATOR_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    settings
}

pub fn prepare_endpoint(raw_endpoint: &str) -> anyhow::Result<String> {
    let endpoint = normalize_endpoint(raw_endpoint);
    let url = Url::parse(&endpoint)
        .with_context(|| format!("invalid configuration endpoint '{raw_endpoint}'"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "configuration endpoint '{raw_endpoint}' must use http or https, got '{}'",
            url.scheme()
        );
    }
    Ok(url.to_string())
}

fn normalize_endpoint(raw_endpoint: &str) -> String {
    let raw_endpoint = raw_endpoint.trim();

    if raw_endpoint.is_empty() {
        return Settings::default().endpoint;
    }

    let endpoint = if raw_endpoint.contains("://") {
        raw_endpoint.to_string()
    } else {
        format!("http://{raw_endpoint}")
    };

    match Url::parse(&endpoint) {
        Ok(mut url) if url.path() == "/" => {
            url.set_path(CONFIGURE_PATH);
            url.to_string()
        }
        _ => endpoint,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
