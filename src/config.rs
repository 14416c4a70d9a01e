use crate::errors::ConfigError;
use std::time::Duration;
use url::Url;

const API_URL: &str = "REELFINDER_API_URL";
const BIND: &str = "REELFINDER_BIND";
const TEMPLATES: &str = "REELFINDER_TEMPLATES";
const TIMEOUT: &str = "REELFINDER_TIMEOUT_SECS";

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the catalog API, always ending in `/`.
    pub api_url: Url,
    pub bind: String,
    pub templates: String,
    pub timeout: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| lookup(name).filter(|v: &String| !v.trim().is_empty());

        let raw_url = value(API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        let api_url = parse_base_url(&raw_url).map_err(|source| ConfigError::InvalidUrl {
            name: API_URL,
            value: raw_url.clone(),
            source,
        })?;

        let timeout = match value(TIMEOUT) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        name: TIMEOUT,
                        value: raw,
                    })
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Settings {
            api_url,
            bind: value(BIND).unwrap_or_else(|| DEFAULT_BIND.to_owned()),
            templates: value(TEMPLATES).unwrap_or_else(|| {
                concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*").to_owned()
            }),
            timeout,
        })
    }
}

// Endpoint paths are joined relative to the base, so a base like
// `http://host/catalog` must keep its last segment.
fn parse_base_url(raw: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(raw.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let settings = settings(&[]).unwrap();
        assert_eq!(settings.api_url.as_str(), "http://localhost:5000/");
        assert_eq!(settings.bind, "127.0.0.1:8080");
        assert_eq!(settings.timeout, Duration::from_secs(10));
        assert!(settings.templates.ends_with("/templates/**/*"));
    }

    #[test]
    fn base_url_keeps_its_path() {
        let settings = settings(&[(API_URL, "http://catalog.local/v1")]).unwrap();
        assert_eq!(settings.api_url.as_str(), "http://catalog.local/v1/");
        assert_eq!(
            settings.api_url.join("api/movies/search").unwrap().as_str(),
            "http://catalog.local/v1/api/movies/search"
        );
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let settings = settings(&[(BIND, "  "), (API_URL, "")]).unwrap();
        assert_eq!(settings.bind, "127.0.0.1:8080");
        assert_eq!(settings.api_url.as_str(), "http://localhost:5000/");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            settings(&[(API_URL, "not a url")]),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            settings(&[(TIMEOUT, "0")]),
            Err(ConfigError::InvalidTimeout { .. })
        ));
        assert!(matches!(
            settings(&[(TIMEOUT, "soon")]),
            Err(ConfigError::InvalidTimeout { .. })
        ));
    }
}
