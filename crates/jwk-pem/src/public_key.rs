//! Decoded public keys and their PKIX (SubjectPublicKeyInfo) encoding

#[cfg(feature = "x25519")]
use spki::{AlgorithmIdentifierRef, ObjectIdentifier, SubjectPublicKeyInfoRef, der::asn1::BitStringRef};
use spki::{Document, EncodePublicKey, der::pem::LineEnding};
use tracing::trace;

use crate::{
    JwkError, KeyType,
    error::{ENCODE_PEM, MARSHAL_PKIX_PUBLIC_KEY, Result},
};

/// PEM type label used for SubjectPublicKeyInfo
pub const PEM_LABEL: &str = "PUBLIC KEY";

/// id-X25519 (RFC 8410)
#[cfg(feature = "x25519")]
const X25519_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.110");

/// A typed public key decoded from a JWK
#[derive(Debug, Clone, PartialEq)]
pub enum PublicKey {
    #[cfg(feature = "rsa")]
    RSA(rsa::RsaPublicKey),
    #[cfg(feature = "p256")]
    P256(p256::PublicKey),
    #[cfg(feature = "p384")]
    P384(p384::PublicKey),
    #[cfg(feature = "p521")]
    P521(p521::PublicKey),
    #[cfg(feature = "k256")]
    Secp256k1(k256::PublicKey),
    #[cfg(feature = "ed25519")]
    Ed25519(ed25519_dalek::VerifyingKey),
    #[cfg(feature = "x25519")]
    X25519(x25519_dalek::PublicKey),
}

impl PublicKey {
    pub fn key_type(&self) -> KeyType {
        match self {
            #[cfg(feature = "rsa")]
            PublicKey::RSA(_) => KeyType::RSA,
            #[cfg(feature = "p256")]
            PublicKey::P256(_) => KeyType::P256,
            #[cfg(feature = "p384")]
            PublicKey::P384(_) => KeyType::P384,
            #[cfg(feature = "p521")]
            PublicKey::P521(_) => KeyType::P521,
            #[cfg(feature = "k256")]
            PublicKey::Secp256k1(_) => KeyType::Secp256k1,
            #[cfg(feature = "ed25519")]
            PublicKey::Ed25519(_) => KeyType::Ed25519,
            #[cfg(feature = "x25519")]
            PublicKey::X25519(_) => KeyType::X25519,
        }
    }

    /// DER encoded SubjectPublicKeyInfo
    pub fn to_public_key_der(&self) -> Result<Document> {
        let der = match self {
            #[cfg(feature = "rsa")]
            PublicKey::RSA(key) => key.to_public_key_der(),
            #[cfg(feature = "p256")]
            PublicKey::P256(key) => key.to_public_key_der(),
            #[cfg(feature = "p384")]
            PublicKey::P384(key) => key.to_public_key_der(),
            #[cfg(feature = "p521")]
            PublicKey::P521(key) => key.to_public_key_der(),
            #[cfg(feature = "k256")]
            PublicKey::Secp256k1(key) => key.to_public_key_der(),
            #[cfg(feature = "ed25519")]
            PublicKey::Ed25519(key) => key.to_public_key_der(),
            #[cfg(feature = "x25519")]
            PublicKey::X25519(key) => x25519_public_key_der(key.as_bytes()),
        };

        der.map_err(|e| {
            JwkError::encode(
                MARSHAL_PKIX_PUBLIC_KEY,
                format!("Fail to marshal {} key: {e}", self.key_type()),
            )
        })
    }

    /// `PUBLIC KEY` PEM block with LF line endings and no trailing newline
    pub fn to_public_key_pem(&self) -> Result<String> {
        let der = self.to_public_key_der()?;
        trace!(key_type = %self.key_type(), der_len = der.as_bytes().len(), "encoding PEM");

        let pem = der
            .to_pem(PEM_LABEL, LineEnding::LF)
            .map_err(|e| JwkError::encode(ENCODE_PEM, format!("Fail to encode PEM key: {e}")))?;

        Ok(pem.trim().to_string())
    }
}

/// x25519-dalek has no SPKI encoder, the structure is assembled here
#[cfg(feature = "x25519")]
fn x25519_public_key_der(public: &[u8; 32]) -> spki::Result<Document> {
    let spki = SubjectPublicKeyInfoRef {
        algorithm: AlgorithmIdentifierRef {
            oid: X25519_OID,
            parameters: None,
        },
        subject_public_key: BitStringRef::from_bytes(public)?,
    };

    Document::try_from(spki)
}
