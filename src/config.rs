//! Client configuration.
//!
//! [`ClientConfig`] is the fully resolved configuration a client runs with.
//! It can be built directly with the builder methods, or resolved from a
//! partial [`ClientOptions`] where every missing field takes its default.

use std::time::Duration;

use tonic::transport::ClientTlsConfig;

/// Default device address (the dish's local management endpoint).
pub const DEFAULT_ADDRESS: &str = "192.168.100.1:9200";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Default connection establishment timeout.
pub const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Default number of attempts used by retry policies.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default initial reconnect backoff.
pub const DEFAULT_RECONNECT_BACKOFF: Duration = Duration::from_millis(1_000);

/// Default reconnect backoff ceiling.
pub const DEFAULT_MAX_RECONNECT_BACKOFF: Duration = Duration::from_millis(30_000);

/// Channel security.
#[derive(Debug, Clone, Default)]
pub enum Credentials {
    /// Plaintext HTTP/2. The device's local endpoint does not use TLS.
    #[default]
    Insecure,
    /// TLS with the given settings.
    Tls(ClientTlsConfig),
}

impl Credentials {
    /// Returns true for TLS credentials.
    #[must_use]
    pub const fn is_tls(&self) -> bool {
        matches!(self, Self::Tls(_))
    }
}

/// Resolved client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Device address as `host:port`.
    pub address: String,
    pub credentials: Credentials,
    /// Deadline applied to every request.
    pub request_timeout: Duration,
    /// Deadline for establishing the connection.
    pub connection_timeout: Duration,
    pub max_retries: u32,
    /// Reopen the channel on use after [`close`](crate::Client::close).
    pub auto_reconnect: bool,
    pub reconnect_backoff: Duration,
    pub max_reconnect_backoff: Duration,
    /// Log every dispatched operation at debug level.
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ADDRESS)
    }
}

impl ClientConfig {
    /// Creates a configuration for `address` with default settings.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            credentials: Credentials::Insecure,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connection_timeout: DEFAULT_CONNECTION_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            auto_reconnect: true,
            reconnect_backoff: DEFAULT_RECONNECT_BACKOFF,
            max_reconnect_backoff: DEFAULT_MAX_RECONNECT_BACKOFF,
            debug: false,
        }
    }

    /// Resolves partial options, filling every missing field with its default.
    ///
    /// The options are left untouched.
    #[must_use]
    pub fn normalize(options: &ClientOptions) -> Self {
        let defaults = Self::default();
        Self {
            address: options.address.clone().unwrap_or(defaults.address),
            credentials: options.credentials.clone().unwrap_or(defaults.credentials),
            request_timeout: options.request_timeout.unwrap_or(defaults.request_timeout),
            connection_timeout: options
                .connection_timeout
                .unwrap_or(defaults.connection_timeout),
            max_retries: options.max_retries.unwrap_or(defaults.max_retries),
            auto_reconnect: options.auto_reconnect.unwrap_or(defaults.auto_reconnect),
            reconnect_backoff: options
                .reconnect_backoff
                .unwrap_or(defaults.reconnect_backoff),
            max_reconnect_backoff: options
                .max_reconnect_backoff
                .unwrap_or(defaults.max_reconnect_backoff),
            debug: options.debug.unwrap_or(defaults.debug),
        }
    }

    /// Sets the channel credentials.
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the connection timeout.
    #[must_use]
    pub const fn connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    #[must_use]
    pub const fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    #[must_use]
    pub const fn auto_reconnect(mut self, enabled: bool) -> Self {
        self.auto_reconnect = enabled;
        self
    }

    /// Sets the initial and maximum reconnect backoff.
    #[must_use]
    pub const fn reconnect_backoff(mut self, initial: Duration, max: Duration) -> Self {
        self.reconnect_backoff = initial;
        self.max_reconnect_backoff = max;
        self
    }

    /// Enables debug logging of dispatched operations.
    #[must_use]
    pub const fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Returns the endpoint URI for the configured address and credentials.
    #[must_use]
    pub fn uri(&self) -> String {
        let scheme = if self.credentials.is_tls() { "https" } else { "http" };
        format!("{scheme}://{}", self.address)
    }
}

/// Partial client options. Missing fields take their defaults.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    pub address: Option<String>,
    pub credentials: Option<Credentials>,
    pub request_timeout: Option<Duration>,
    pub connection_timeout: Option<Duration>,
    pub max_retries: Option<u32>,
    pub auto_reconnect: Option<bool>,
    pub reconnect_backoff: Option<Duration>,
    pub max_reconnect_backoff: Option<Duration>,
    pub debug: Option<bool>,
}

impl From<&ClientOptions> for ClientConfig {
    fn from(options: &ClientOptions) -> Self {
        Self::normalize(options)
    }
}

impl From<ClientOptions> for ClientConfig {
    fn from(options: ClientOptions) -> Self {
        Self::normalize(&options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::normalize(&ClientOptions::default());
        assert_eq!(config.address, "192.168.100.1:9200");
        assert_eq!(config.request_timeout, Duration::from_millis(30_000));
        assert_eq!(config.connection_timeout, Duration::from_millis(10_000));
        assert_eq!(config.max_retries, 3);
        assert!(config.auto_reconnect);
        assert_eq!(config.reconnect_backoff, Duration::from_millis(1_000));
        assert_eq!(config.max_reconnect_backoff, Duration::from_millis(30_000));
        assert!(!config.debug);
        assert!(!config.credentials.is_tls());
    }

    #[test]
    fn test_normalize_keeps_given_fields() {
        let options = ClientOptions {
            address: Some("10.0.0.1:9200".into()),
            max_retries: Some(5),
            debug: Some(true),
            ..ClientOptions::default()
        };
        let config = ClientConfig::normalize(&options);
        assert_eq!(config.address, "10.0.0.1:9200");
        assert_eq!(config.max_retries, 5);
        assert!(config.debug);
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);

        // Input is left as given.
        assert_eq!(options.address.as_deref(), Some("10.0.0.1:9200"));
        assert!(options.request_timeout.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new("dish.local:9200")
            .request_timeout(Duration::from_secs(5))
            .connection_timeout(Duration::from_secs(2))
            .max_retries(1)
            .auto_reconnect(false)
            .reconnect_backoff(Duration::from_millis(50), Duration::from_secs(1))
            .debug(true);
        assert_eq!(config.address, "dish.local:9200");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.connection_timeout, Duration::from_secs(2));
        assert_eq!(config.max_retries, 1);
        assert!(!config.auto_reconnect);
        assert_eq!(config.reconnect_backoff, Duration::from_millis(50));
        assert_eq!(config.max_reconnect_backoff, Duration::from_secs(1));
        assert!(config.debug);
    }

    #[test]
    fn test_uri_scheme_follows_credentials() {
        let config = ClientConfig::default();
        assert_eq!(config.uri(), "http://192.168.100.1:9200");

        let config = config.credentials(Credentials::Tls(ClientTlsConfig::new()));
        assert_eq!(config.uri(), "https://192.168.100.1:9200");
    }
}
