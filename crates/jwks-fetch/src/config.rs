//! Configuration for the JWKS fetcher
//! You need to use the `builder()` method to create a new instance of `FetchConfig`

use std::time::Duration;

/// Default `User-Agent` header sent with the discovery request
pub const DEFAULT_USER_AGENT: &str = concat!("jwks-fetch/", env!("CARGO_PKG_VERSION"));

/// Options applied to every fetch made by a [crate::JwksFetcher]
///
/// Credentials are never part of the configuration, they are handed to each fetch call.
/// Example:
/// ```
/// use jwks_fetch::config::FetchConfig;
/// use std::time::Duration;
///
/// let config = FetchConfig::builder()
///     .with_timeout(Duration::from_secs(10))
///     .build();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchConfig {
    pub(crate) timeout: Option<Duration>,
    pub(crate) connect_timeout: Option<Duration>,
    pub(crate) user_agent: String,
    pub(crate) require_success_status: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfigBuilder::default().build()
    }
}

impl FetchConfig {
    /// Returns a builder for `FetchConfig`
    pub fn builder() -> FetchConfigBuilder {
        FetchConfigBuilder::default()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn require_success_status(&self) -> bool {
        self.require_success_status
    }
}

/// Builder for `FetchConfig`.
/// Example:
/// ```
/// use jwks_fetch::config::FetchConfig;
///
/// // Create a new `FetchConfig` with defaults
/// let config = FetchConfig::builder().build();
/// assert!(!config.require_success_status());
/// ```
pub struct FetchConfigBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: String,
    require_success_status: bool,
}

impl Default for FetchConfigBuilder {
    fn default() -> Self {
        FetchConfigBuilder {
            timeout: None,
            connect_timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            require_success_status: false,
        }
    }
}

impl FetchConfigBuilder {
    /// Default starting constructor for `FetchConfigBuilder`
    pub fn new() -> FetchConfigBuilder {
        FetchConfigBuilder::default()
    }

    /// Total time allowed for a fetch, from connect to the last body byte
    /// An elapsed timeout is reported as a transport error
    /// Default: no timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Time allowed to establish the TCP connection
    /// Default: no timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Default: `jwks-fetch/<version>`
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Fail with a status error when the server answers with anything other than 2xx
    /// Default: false (the body is decoded whatever the status)
    pub fn with_require_success_status(mut self, require: bool) -> Self {
        self.require_success_status = require;
        self
    }

    pub fn build(self) -> FetchConfig {
        FetchConfig {
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            user_agent: self.user_agent,
            require_success_status: self.require_success_status,
        }
    }
}
