//! Generator configuration.

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image-preview";

/// Base URL of the generative language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Primary environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Secondary environment variable checked when [`API_KEY_ENV`] is unset.
pub const FALLBACK_API_KEY_ENV: &str = "API_KEY";

/// Environment variable overriding the model.
pub const MODEL_ENV: &str = "GEMINI_IMAGE_MODEL";

/// Everything a generator needs to reach the remote endpoint.
///
/// The key is optional here; [`Generator`](super::Generator) construction
/// rejects a missing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Read the key (and optional model override) from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup(API_KEY_ENV)
            .filter(|k| !k.trim().is_empty())
            .or_else(|| lookup(FALLBACK_API_KEY_ENV));
        let model = lookup(MODEL_ENV)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Self {
            api_key,
            model,
            ..Self::default()
        }
    }

    /// The key, if present and not blank.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// `generateContent` URL for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_default_has_no_key() {
        let config = GeneratorConfig::default();
        assert_eq!(config.api_key(), None);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_from_lookup_primary_key() {
        let config = GeneratorConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "primary"),
            ("API_KEY", "secondary"),
        ]));
        assert_eq!(config.api_key(), Some("primary"));
    }

    #[test]
    fn test_from_lookup_fallback_key() {
        let config = GeneratorConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "  "),
            ("API_KEY", "secondary"),
        ]));
        assert_eq!(config.api_key(), Some("secondary"));
    }

    #[test]
    fn test_from_lookup_missing_key() {
        let config = GeneratorConfig::from_lookup(lookup(&[]));
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_blank_key_is_missing() {
        let config = GeneratorConfig {
            api_key: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_model_override() {
        let config = GeneratorConfig::from_lookup(lookup(&[("GEMINI_IMAGE_MODEL", "custom")]));
        assert_eq!(config.model, "custom");
    }

    #[test]
    fn test_endpoint() {
        let config = GeneratorConfig {
            base_url: "http://localhost:8080/v1beta/".into(),
            model: "m".into(),
            ..Default::default()
        };
        assert_eq!(
            config.endpoint(),
            "http://localhost:8080/v1beta/models/m:generateContent"
        );
    }
}
