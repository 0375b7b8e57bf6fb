/*!
 * Fetches the OpenID JSON Web Key Set published by a cluster
 *
 * The keys are read from `{host}/openid/v1/jwks` over a mutually authenticated TLS
 * connection that trusts only the supplied CA. Each key is returned as compact JSON
 * text, exactly as the server shaped it.
 *
 * ```no_run
 * # async fn run() -> jwks_fetch::errors::Result<()> {
 * use jwks_fetch::{TlsCredentials, fetch};
 *
 * let credentials = TlsCredentials::new(
 *     std::fs::read_to_string("client.crt").unwrap(),
 *     std::fs::read_to_string("client.key").unwrap(),
 *     std::fs::read_to_string("ca.crt").unwrap(),
 * );
 * let fetched = fetch(&credentials, "https://cluster.example.com:6443").await?;
 * for jwk in fetched.jwks {
 *     println!("{jwk}");
 * }
 * # Ok(())
 * # }
 * ```
 */

pub mod config;
pub mod errors;
mod fetcher;
mod jwks;
mod tls;

pub use config::{FetchConfig, FetchConfigBuilder};
pub use errors::FetchError;
pub use fetcher::{DISCOVERY_PATH, FetchedJwks, JwksFetcher, discovery_url, fetch};
pub use jwks::parse_jwks;
pub use tls::{ClientIdentity, TlsCredentials, load_trust_anchors};
