//! Error types for JWK conversion

use thiserror::Error;

/// Parsing the JWK JSON text
pub const PARSE_JWK: &str = "parse_jwk";
/// Turning JWK members into a typed public key
pub const DECODE_PUBLIC_KEY: &str = "decode_public_key";
/// Encoding the public key as SubjectPublicKeyInfo DER
pub const MARSHAL_PKIX_PUBLIC_KEY: &str = "marshal_pkix_public_key";
/// Wrapping the DER in a PEM block
pub const ENCODE_PEM: &str = "encode_pem";

/// JWK conversion errors, none of them are retryable
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JwkError {
    /// The JWK text isn't valid JSON or doesn't describe a supported public key
    #[error("{operation}: Can't decode JWK: {message}")]
    Decode {
        operation: &'static str,
        message: String,
    },

    /// A decoded key can't be expressed as a PKIX public key
    #[error("{operation}: Can't encode public key: {message}")]
    Encode {
        operation: &'static str,
        message: String,
    },
}

impl JwkError {
    pub(crate) fn decode(operation: &'static str, message: impl Into<String>) -> Self {
        JwkError::Decode {
            operation,
            message: message.into(),
        }
    }

    pub(crate) fn encode(operation: &'static str, message: impl Into<String>) -> Self {
        JwkError::Encode {
            operation,
            message: message.into(),
        }
    }

    /// Name of the step that failed
    pub fn operation(&self) -> &'static str {
        match self {
            JwkError::Decode { operation, .. } | JwkError::Encode { operation, .. } => operation,
        }
    }

    /// Underlying diagnostic message
    pub fn message(&self) -> &str {
        match self {
            JwkError::Decode { message, .. } | JwkError::Encode { message, .. } => message,
        }
    }
}

pub type Result<T> = std::result::Result<T, JwkError>;
