//! Provider configuration resolution.

/// Environment variable consulted when `url` is not set in configuration.
pub const ENV_URL: &str = "USG_DNS_URL";
/// Environment variable consulted when `token` is not set in configuration.
pub const ENV_TOKEN: &str = "USG_DNS_TOKEN";

/// A host-supplied configuration attribute value.
///
/// Host tools distinguish an attribute that is absent from one whose value is
/// not resolvable yet (for example, derived from a resource that has not been
/// created). Unknown values make configuration fail; null values fall back to
/// the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigValue {
    /// The host cannot resolve the value yet.
    Unknown,
    /// The attribute is absent from the configuration.
    #[default]
    Null,
    /// The attribute has a concrete value.
    Known(String),
}

impl ConfigValue {
    /// Whether the host cannot resolve the value yet.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// The concrete value, when there is one.
    #[must_use]
    pub fn as_known(&self) -> Option<&str> {
        match self {
            Self::Known(value) => Some(value),
            _ => None,
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Known(value.to_string())
    }
}

/// Provider-level configuration as decoded from the host tool.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    /// Base URL of the usg-dns-api server.
    pub url: ConfigValue,
    /// API token, sent verbatim as the `Authorization` header value.
    pub token: ConfigValue,
}

/// Resolves one setting: a known configuration value overrides the
/// environment variable. An empty result means the setting is missing.
pub(crate) fn resolve_setting(
    value: &ConfigValue,
    env_var: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> String {
    match value.as_known() {
        Some(explicit) => explicit.to_string(),
        None => lookup(env_var).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_value_wins_over_environment() {
        let value = ConfigValue::Known("https://config.example.com".to_string());
        let resolved = resolve_setting(&value, ENV_URL, |_| {
            Some("https://env.example.com".to_string())
        });
        assert_eq!(resolved, "https://config.example.com");
    }

    #[test]
    fn null_value_falls_back_to_environment() {
        let resolved = resolve_setting(&ConfigValue::Null, ENV_URL, |name| {
            assert_eq!(name, ENV_URL);
            Some("https://env.example.com".to_string())
        });
        assert_eq!(resolved, "https://env.example.com");
    }

    #[test]
    fn missing_everywhere_resolves_empty() {
        let resolved = resolve_setting(&ConfigValue::Null, ENV_TOKEN, |_| None);
        assert_eq!(resolved, "");
    }

    #[test]
    fn explicit_empty_value_overrides_environment() {
        // An explicitly configured empty string still wins, and then fails
        // the missing-value validation downstream.
        let value = ConfigValue::Known(String::new());
        let resolved = resolve_setting(&value, ENV_TOKEN, |_| Some("from-env".to_string()));
        assert_eq!(resolved, "");
    }

    #[test]
    fn default_is_null() {
        assert_eq!(ConfigValue::default(), ConfigValue::Null);
        assert!(!ConfigValue::default().is_unknown());
    }

    #[test]
    fn from_str_is_known() {
        let value = ConfigValue::from("secret");
        assert_eq!(value.as_known(), Some("secret"));
    }
}
