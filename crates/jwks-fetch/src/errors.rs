/*!
 * Errors raised while fetching a JWKS
 */

use thiserror::Error;

/// Parsing the client certificate chain and private key
pub const LOAD_CLIENT_IDENTITY: &str = "load_client_identity";
/// Parsing the CA certificate bundle
pub const LOAD_TRUST_ANCHORS: &str = "load_trust_anchors";
/// Building the client and sending the request
pub const GET: &str = "get";
/// Reading the response body
pub const READ_BODY: &str = "read_body";
/// Decoding the `{"keys": [...]}` envelope
pub const UNMARSHAL_JWKS: &str = "unmarshal_jwks";
/// Re-serializing a single key
pub const MARSHAL_JWK: &str = "marshal_jwk";

/// JWKS fetch errors
///
/// None of these are retried, a failed fetch never returns partial keys.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Client certificate or key is malformed, or they don't belong together
    #[error("{operation}: Can't load client identity: {message}")]
    Identity {
        operation: &'static str,
        message: String,
    },

    /// CA bundle holds no usable certificate
    #[error("{operation}: Can't load trust anchors: {message}")]
    TrustStore {
        operation: &'static str,
        message: String,
    },

    /// Connect, TLS handshake, read or timeout failure
    #[error("{operation}: Can't reach JWKS endpoint: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    /// Response body isn't a JWKS document
    #[error("{operation}: Can't decode JWKS: {message}")]
    Envelope {
        operation: &'static str,
        message: String,
    },

    /// Non-2xx response while strict status checking is enabled
    #[error("{operation}: Unexpected HTTP status {status}: {message}")]
    Status {
        operation: &'static str,
        status: u16,
        message: String,
    },
}

impl FetchError {
    pub(crate) fn identity(message: impl Into<String>) -> Self {
        FetchError::Identity {
            operation: LOAD_CLIENT_IDENTITY,
            message: message.into(),
        }
    }

    pub(crate) fn trust_store(message: impl Into<String>) -> Self {
        FetchError::TrustStore {
            operation: LOAD_TRUST_ANCHORS,
            message: message.into(),
        }
    }

    pub(crate) fn transport(operation: &'static str, message: impl Into<String>) -> Self {
        FetchError::Transport {
            operation,
            message: message.into(),
        }
    }

    pub(crate) fn envelope(operation: &'static str, message: impl Into<String>) -> Self {
        FetchError::Envelope {
            operation,
            message: message.into(),
        }
    }

    /// Name of the step that failed
    pub fn operation(&self) -> &'static str {
        match self {
            FetchError::Identity { operation, .. }
            | FetchError::TrustStore { operation, .. }
            | FetchError::Transport { operation, .. }
            | FetchError::Envelope { operation, .. }
            | FetchError::Status { operation, .. } => operation,
        }
    }

    /// Underlying diagnostic message
    pub fn message(&self) -> &str {
        match self {
            FetchError::Identity { message, .. }
            | FetchError::TrustStore { message, .. }
            | FetchError::Transport { message, .. }
            | FetchError::Envelope { message, .. }
            | FetchError::Status { message, .. } => message,
        }
    }
}

/// Flattens an error and its sources into one line
///
/// reqwest only reports the outermost layer in `Display`, the TLS or IO cause sits further down.
pub(crate) fn error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

pub type Result<T> = std::result::Result<T, FetchError>;
