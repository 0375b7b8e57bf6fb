//! JWK (JSON Web Key) types per RFC 7517

use std::str::FromStr;

use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    JwkError, KeyType, PublicKey,
    error::{DECODE_PUBLIC_KEY, MARSHAL_PKIX_PUBLIC_KEY, PARSE_JWK, Result},
};

/// RFC 7517 JWK Struct
///
/// Members other than the ones modelled here (`alg`, `use`, `key_ops`, `x5c`, ...) are ignored.
#[derive(Debug, Serialize, Deserialize, Clone, Zeroize, ZeroizeOnDrop)]
pub struct JWK {
    #[serde(rename = "kid")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
    #[serde(flatten)]
    pub params: Params,
}

impl JWK {
    /// Returns the KeyType for a JWK
    pub fn key_type(&self) -> KeyType {
        match &self.params {
            Params::RSA(_) => KeyType::RSA,
            Params::EC(params) => match params.curve.as_str() {
                "P-256" => KeyType::P256,
                "P-384" => KeyType::P384,
                "P-521" => KeyType::P521,
                "secp256k1" => KeyType::Secp256k1,
                _ => KeyType::Unknown,
            },
            Params::OKP(params) => match params.curve.as_str() {
                "Ed25519" => KeyType::Ed25519,
                "X25519" => KeyType::X25519,
                _ => KeyType::Unknown,
            },
            Params::Oct(_) => KeyType::Unknown,
        }
    }

    /// True when the JWK carries the private exponent or scalar (`d`)
    pub fn has_private_material(&self) -> bool {
        match &self.params {
            Params::RSA(params) => params.d.is_some(),
            Params::EC(params) => params.d.is_some(),
            Params::OKP(params) => params.d.is_some(),
            Params::Oct(_) => false,
        }
    }

    /// Key identifier, empty when the JWK has no `kid`
    pub fn key_id_or_default(&self) -> &str {
        self.key_id.as_deref().unwrap_or_default()
    }

    /// Decodes the public key described by this JWK
    ///
    /// Symmetric keys and unsupported curves fail as decode errors.
    /// Keys that carry private material fail as encode errors, they are never projected.
    pub fn public_key(&self) -> Result<PublicKey> {
        if matches!(self.params, Params::Oct(_)) {
            return Err(JwkError::decode(
                DECODE_PUBLIC_KEY,
                "Symmetric (oct) keys have no public key",
            ));
        }
        if self.has_private_material() {
            return Err(JwkError::encode(
                MARSHAL_PKIX_PUBLIC_KEY,
                format!(
                    "{} JWK carries private key material, which is not accepted",
                    self.key_type()
                ),
            ));
        }

        match (&self.params, self.key_type()) {
            #[cfg(feature = "rsa")]
            (Params::RSA(params), KeyType::RSA) => crate::rsa::public_key(params),
            #[cfg(feature = "p256")]
            (Params::EC(params), KeyType::P256) => crate::p256::public_key(params),
            #[cfg(feature = "p384")]
            (Params::EC(params), KeyType::P384) => crate::p384::public_key(params),
            #[cfg(feature = "p521")]
            (Params::EC(params), KeyType::P521) => crate::p521::public_key(params),
            #[cfg(feature = "k256")]
            (Params::EC(params), KeyType::Secp256k1) => crate::secp256k1::public_key(params),
            #[cfg(feature = "ed25519")]
            (Params::OKP(params), KeyType::Ed25519) => crate::ed25519::public_key(params),
            #[cfg(feature = "x25519")]
            (Params::OKP(params), KeyType::X25519) => crate::x25519::public_key(params),
            (Params::EC(params), _) => Err(JwkError::decode(
                DECODE_PUBLIC_KEY,
                format!("Unsupported EC curve: {}", params.curve),
            )),
            (Params::OKP(params), _) => Err(JwkError::decode(
                DECODE_PUBLIC_KEY,
                format!("Unsupported OKP curve: {}", params.curve),
            )),
            (_, key_type) => Err(JwkError::decode(
                DECODE_PUBLIC_KEY,
                format!("Unsupported key type: {key_type}"),
            )),
        }
    }
}

impl FromStr for JWK {
    type Err = JwkError;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| JwkError::decode(PARSE_JWK, e.to_string()))
    }
}

/// JWK Key Types and associated Parameters
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Zeroize, ZeroizeOnDrop)]
#[serde(tag = "kty")]
pub enum Params {
    RSA(RSAParams),
    EC(ECParams),
    OKP(OctetParams),
    #[serde(rename = "oct")]
    Oct(SymmetricParams),
}

/// RSA parameters
#[derive(Debug, Serialize, Deserialize, Clone, Zeroize, PartialEq, ZeroizeOnDrop)]
pub struct RSAParams {
    pub n: String,
    pub e: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
}

/// Elliptic Curve parameters (P-256, P-384, P-521, secp256k1)
#[derive(Debug, Serialize, Deserialize, Clone, Zeroize, PartialEq, ZeroizeOnDrop)]
pub struct ECParams {
    #[serde(rename = "crv")]
    pub curve: String,
    pub x: String,
    pub y: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
}

impl ECParams {
    /// Uncompressed SEC1 point (`0x04 || x || y`)
    /// Each coordinate must be exactly `coordinate_len` bytes (RFC 7518 section 6.2.1.2)
    pub(crate) fn sec1_point(&self, coordinate_len: usize) -> Result<Vec<u8>> {
        let x = decode_member("x", &self.x)?;
        let y = decode_member("y", &self.y)?;

        for (name, coordinate) in [("x", &x), ("y", &y)] {
            if coordinate.len() != coordinate_len {
                return Err(JwkError::decode(
                    DECODE_PUBLIC_KEY,
                    format!(
                        "{} {name} coordinate must be {coordinate_len} bytes, got {}",
                        self.curve,
                        coordinate.len()
                    ),
                ));
            }
        }

        let mut point = Vec::with_capacity(1 + 2 * coordinate_len);
        point.push(0x04);
        point.extend_from_slice(&x);
        point.extend_from_slice(&y);
        Ok(point)
    }
}

/// Octet Key Pair parameters (Ed25519, X25519)
#[derive(Debug, Serialize, Deserialize, Clone, Zeroize, PartialEq, ZeroizeOnDrop)]
pub struct OctetParams {
    #[serde(rename = "crv")]
    pub curve: String,
    pub x: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<String>,
}

impl OctetParams {
    /// Raw public key bytes, which must be exactly `N` bytes long
    pub(crate) fn public_bytes<const N: usize>(&self) -> Result<[u8; N]> {
        let x = decode_member("x", &self.x)?;
        <[u8; N]>::try_from(x.as_slice()).map_err(|_| {
            JwkError::decode(
                DECODE_PUBLIC_KEY,
                format!("{} public key must be {N} bytes, got {}", self.curve, x.len()),
            )
        })
    }
}

/// Symmetric key parameters, only modelled so they can be rejected explicitly
#[derive(Debug, Serialize, Deserialize, Clone, Zeroize, PartialEq, ZeroizeOnDrop)]
pub struct SymmetricParams {
    pub k: String,
}

/// Decodes a base64url JWK member, tolerating trailing `=` padding
pub(crate) fn decode_member(name: &str, value: &str) -> Result<Vec<u8>> {
    BASE64_URL_SAFE_NO_PAD
        .decode(value.trim_end_matches('='))
        .map_err(|e| {
            JwkError::decode(
                DECODE_PUBLIC_KEY,
                format!("Member `{name}` isn't valid base64url: {e}"),
            )
        })
}
