//! The discovery request itself

use std::sync::Arc;

use reqwest::Client;
use rustls::ClientConfig;
use tracing::{debug, warn};

use crate::{
    config::FetchConfig,
    errors::{FetchError, GET, READ_BODY, Result, error_chain},
    jwks::parse_jwks,
    tls::TlsCredentials,
};

/// Path of the OpenID JWKS document below the cluster host
pub const DISCOVERY_PATH: &str = "/openid/v1/jwks";

/// Keys returned by a cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedJwks {
    /// Host with trailing `/` removed
    pub id: String,
    /// One compact JSON text per key, in response order
    pub jwks: Vec<String>,
}

/// Returns `(id, url)` for a host, stripping every trailing `/`
/// Example:
/// ```
/// use jwks_fetch::discovery_url;
///
/// let (id, url) = discovery_url("https://cluster.example.com:6443/");
/// assert_eq!(id, "https://cluster.example.com:6443");
/// assert_eq!(url, "https://cluster.example.com:6443/openid/v1/jwks");
/// ```
pub fn discovery_url(host: &str) -> (String, String) {
    let id = host.trim_end_matches('/').to_string();
    let url = format!("{id}{DISCOVERY_PATH}");
    (id, url)
}

/// Fetches the JWKS of a cluster using a [FetchConfig]
///
/// A new TLS and HTTP client is built on every call from that call's credentials.
#[derive(Clone, Debug, Default)]
pub struct JwksFetcher {
    config: FetchConfig,
}

impl JwksFetcher {
    pub fn new(config: FetchConfig) -> Self {
        JwksFetcher { config }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetches `{host}/openid/v1/jwks` over mutual TLS
    pub async fn fetch(&self, credentials: &TlsCredentials, host: &str) -> Result<FetchedJwks> {
        let provider = Arc::new(rustls::crypto::aws_lc_rs::default_provider());
        let tls_config = credentials.client_config(provider)?;

        let (id, url) = discovery_url(host);
        let client = self.http_client(tls_config)?;

        debug!(url, "fetching JWKS");
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::transport(GET, error_chain(&e)))?;

        let status = response.status();
        if !status.is_success() {
            if self.config.require_success_status {
                return Err(FetchError::Status {
                    operation: GET,
                    status: status.as_u16(),
                    message: format!("{url} answered {status}"),
                });
            }
            warn!(url, %status, "non-success status, decoding body anyway");
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::transport(READ_BODY, error_chain(&e)))?;

        let jwks = parse_jwks(&body)?;
        debug!(id, keys = jwks.len(), "JWKS fetched");

        Ok(FetchedJwks { id, jwks })
    }

    fn http_client(&self, tls_config: ClientConfig) -> Result<Client> {
        let mut builder = reqwest::ClientBuilder::new()
            .tls_backend_preconfigured(tls_config)
            .no_proxy()
            .user_agent(self.config.user_agent.as_str());

        if let Some(timeout) = self.config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        builder.build().map_err(|e| {
            FetchError::transport(
                GET,
                format!("Couldn't build HTTP client: {}", error_chain(&e)),
            )
        })
    }
}

/// Fetches `{host}/openid/v1/jwks` over mutual TLS with the default [FetchConfig]
pub async fn fetch(credentials: &TlsCredentials, host: &str) -> Result<FetchedJwks> {
    JwksFetcher::default().fetch(credentials, host).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_normalization() {
        for host in [
            "https://host:6443",
            "https://host:6443/",
            "https://host:6443///",
        ] {
            let (id, url) = discovery_url(host);
            assert_eq!(id, "https://host:6443");
            assert_eq!(url, "https://host:6443/openid/v1/jwks");
        }
    }

    #[tokio::test]
    async fn invalid_identity_fails_before_connecting() {
        let credentials = TlsCredentials::new("", "", "not a cert");

        // Nothing listens on port 9, a connection attempt would be a transport error
        let err = fetch(&credentials, "https://127.0.0.1:9").await.unwrap_err();
        assert!(matches!(err, FetchError::Identity { .. }));
    }
}
