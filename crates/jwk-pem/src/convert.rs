//! JWK text to PEM conversion

use tracing::debug;

use crate::{JWK, error::Result};

/// Result of converting a single JWK
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedKey {
    /// The JWK `kid`, empty when absent
    pub key_id: String,
    /// `PUBLIC KEY` PEM block, trimmed
    pub pem: String,
}

/// Converts the JSON text of a single JWK into a PKIX `PUBLIC KEY` PEM block
///
/// Either a complete [ConvertedKey] or an error is returned, never both.
/// Example:
/// ```
/// let converted = jwk_pem::convert(
///     r#"{"kty":"OKP","crv":"Ed25519","x":"11qYAYKxCrfVS_7TyWQHOg7hcvPapiMlrwIaaPcHURo","kid":"ed"}"#,
/// )
/// .unwrap();
///
/// assert_eq!(converted.key_id, "ed");
/// assert!(converted.pem.starts_with("-----BEGIN PUBLIC KEY-----"));
/// ```
pub fn convert(jwk: &str) -> Result<ConvertedKey> {
    let jwk: JWK = jwk.parse()?;
    let public_key = jwk.public_key()?;
    let pem = public_key.to_public_key_pem()?;

    debug!(key_id = jwk.key_id_or_default(), key_type = %public_key.key_type(), "converted JWK to PEM");

    Ok(ConvertedKey {
        key_id: jwk.key_id_or_default().to_string(),
        pem,
    })
}
