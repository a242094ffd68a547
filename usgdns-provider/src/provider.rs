//! Provider bootstrap: configuration validation and client construction.

use std::env;
use std::sync::Arc;

use usgdns_client::Client;

use crate::config::{ENV_TOKEN, ENV_URL, ProviderConfig, resolve_setting};
use crate::diagnostics::Diagnostics;

/// Provider bootstrap.
///
/// Validates the connection configuration and constructs the [`Client`] that
/// every resource and data-source instance of the session shares.
pub struct Provider {
    version: String,
}

impl Provider {
    /// Creates the provider with the version string reported to the host
    /// tool ("dev" for local builds, the release version otherwise).
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    /// Version string reported to the host tool.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Resolves `url` and `token` and builds the shared client.
    ///
    /// Resolution precedence per setting: explicit configuration value, then
    /// the [`ENV_URL`] / [`ENV_TOKEN`] environment variable. Unknown or
    /// missing values abort configuration; every problem found is collected
    /// into the returned [`Diagnostics`] so the user sees all of them at
    /// once.
    pub fn configure(&self, config: &ProviderConfig) -> Result<Arc<Client>, Diagnostics> {
        Self::configure_with_env(config, |name| env::var(name).ok())
    }

    fn configure_with_env(
        config: &ProviderConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Arc<Client>, Diagnostics> {
        let mut diagnostics = Diagnostics::default();

        // A configured value must be known before the client can be built.
        if config.url.is_unknown() {
            diagnostics.add_attribute_error(
                "url",
                "Unknown usg-dns API URL",
                format!(
                    "The provider cannot create the usg-dns API client as there is an unknown \
                     configuration value for the URL. Either target apply the source of the \
                     value first, set the value statically in the configuration, or use the \
                     {ENV_URL} environment variable."
                ),
            );
        }
        if config.token.is_unknown() {
            diagnostics.add_attribute_error(
                "token",
                "Unknown usg-dns API token",
                format!(
                    "The provider cannot create the usg-dns API client as there is an unknown \
                     configuration value for the token. Either target apply the source of the \
                     value first, set the value statically in the configuration, or use the \
                     {ENV_TOKEN} environment variable."
                ),
            );
        }
        if diagnostics.has_errors() {
            return Err(diagnostics);
        }

        let url = resolve_setting(&config.url, ENV_URL, &lookup);
        let token = resolve_setting(&config.token, ENV_TOKEN, &lookup);

        if url.is_empty() {
            diagnostics.add_attribute_error(
                "url",
                "Missing usg-dns API URL",
                format!(
                    "The provider cannot create the usg-dns API client as there is a missing or \
                     empty value for the URL. Set the url value in the configuration or use the \
                     {ENV_URL} environment variable. If either is already set, ensure the value \
                     is not empty."
                ),
            );
        }
        if token.is_empty() {
            diagnostics.add_attribute_error(
                "token",
                "Missing usg-dns API token",
                format!(
                    "The provider cannot create the usg-dns API client as there is a missing or \
                     empty value for the token. Set the token value in the configuration or use \
                     the {ENV_TOKEN} environment variable. If either is already set, ensure the \
                     value is not empty."
                ),
            );
        }
        if diagnostics.has_errors() {
            return Err(diagnostics);
        }

        let client = Client::new(&url, &token);
        log::debug!("Configured usg-dns client for {}", client.base_url());

        Ok(Arc::new(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigValue;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn configure_with_explicit_values() {
        let config = ProviderConfig {
            url: ConfigValue::from("https://dns.example.com/"),
            token: ConfigValue::from("secret"),
        };

        let client = Provider::configure_with_env(&config, no_env).expect("configure succeeds");
        assert_eq!(client.base_url(), "https://dns.example.com");
    }

    #[test]
    fn explicit_url_wins_over_environment() {
        let config = ProviderConfig {
            url: ConfigValue::from("https://config.example.com"),
            token: ConfigValue::from("secret"),
        };

        let client = Provider::configure_with_env(&config, |name| match name {
            ENV_URL => Some("https://env.example.com".to_string()),
            _ => None,
        })
        .expect("configure succeeds");
        assert_eq!(client.base_url(), "https://config.example.com");
    }

    #[test]
    fn environment_fills_null_values() {
        let config = ProviderConfig::default();

        let client = Provider::configure_with_env(&config, |name| match name {
            ENV_URL => Some("https://env.example.com".to_string()),
            ENV_TOKEN => Some("env-secret".to_string()),
            _ => None,
        })
        .expect("configure succeeds");
        assert_eq!(client.base_url(), "https://env.example.com");
    }

    #[test]
    fn missing_values_reported_together() {
        let config = ProviderConfig::default();

        let diagnostics =
            Provider::configure_with_env(&config, no_env).expect_err("configure fails");

        let entries = diagnostics.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].attribute, Some("url"));
        assert!(entries[0].summary.contains("Missing"));
        assert_eq!(entries[1].attribute, Some("token"));
        assert!(entries[1].summary.contains("Missing"));
    }

    #[test]
    fn unknown_values_reported_together() {
        let config = ProviderConfig {
            url: ConfigValue::Unknown,
            token: ConfigValue::Unknown,
        };

        // Environment must not mask an unknown configured value.
        let diagnostics = Provider::configure_with_env(&config, |_| Some("set".to_string()))
            .expect_err("configure fails");

        let entries = diagnostics.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].summary.contains("Unknown"));
        assert!(entries[1].summary.contains("Unknown"));
    }

    #[test]
    fn missing_token_alone_is_single_diagnostic() {
        let config = ProviderConfig {
            url: ConfigValue::from("https://dns.example.com"),
            token: ConfigValue::Null,
        };

        let diagnostics =
            Provider::configure_with_env(&config, no_env).expect_err("configure fails");

        let entries = diagnostics.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].attribute, Some("token"));
    }

    #[test]
    fn version_is_reported() {
        assert_eq!(Provider::new("dev").version(), "dev");
    }
}
