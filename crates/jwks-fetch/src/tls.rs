//! Client identity and trust anchors for the mutual TLS connection

use std::{fmt, sync::Arc};

use rustls::{
    ClientConfig, RootCertStore,
    crypto::CryptoProvider,
    pki_types::{
        CertificateDer, PrivateKeyDer,
        pem::{self, PemObject},
    },
    sign::{CertifiedKey, SingleCertAndKey},
};
use tracing::{debug, warn};

use crate::errors::{FetchError, GET, Result};

/// PEM encoded material needed to reach the discovery endpoint
///
/// `client_key` may be PKCS#1, PKCS#8 or SEC1.
#[derive(Clone)]
pub struct TlsCredentials {
    pub client_certificate: String,
    pub client_key: String,
    pub ca_certificate: String,
}

impl TlsCredentials {
    pub fn new(
        client_certificate: impl Into<String>,
        client_key: impl Into<String>,
        ca_certificate: impl Into<String>,
    ) -> Self {
        TlsCredentials {
            client_certificate: client_certificate.into(),
            client_key: client_key.into(),
            ca_certificate: ca_certificate.into(),
        }
    }

    /// Builds a rustls client configuration scoped to these credentials
    ///
    /// Only the supplied CA is trusted, nothing is installed process wide.
    pub fn client_config(&self, provider: Arc<CryptoProvider>) -> Result<ClientConfig> {
        let identity =
            ClientIdentity::from_pem(&self.client_certificate, &self.client_key, &provider)?;
        let roots = load_trust_anchors(&self.ca_certificate)?;

        let config = ClientConfig::builder_with_provider(provider)
            .with_safe_default_protocol_versions()
            .map_err(|e| {
                FetchError::transport(GET, format!("Couldn't build TLS client config: {e}"))
            })?
            .with_root_certificates(roots)
            .with_client_cert_resolver(Arc::new(SingleCertAndKey::from(identity.certified_key)));

        Ok(config)
    }
}

impl fmt::Debug for TlsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TlsCredentials")
            .field("client_certificate", &self.client_certificate)
            .field("client_key", &"<redacted>")
            .field("ca_certificate", &self.ca_certificate)
            .finish()
    }
}

/// Client certificate chain together with its private key
#[derive(Debug, Clone)]
pub struct ClientIdentity {
    certified_key: CertifiedKey,
}

impl ClientIdentity {
    /// Parses the certificate chain and private key, checking that the key belongs to the leaf
    pub fn from_pem(
        certificate_pem: &str,
        key_pem: &str,
        provider: &CryptoProvider,
    ) -> Result<Self> {
        let certs = CertificateDer::pem_slice_iter(certificate_pem.as_bytes())
            .collect::<std::result::Result<Vec<CertificateDer<'static>>, _>>()
            .map_err(|e| FetchError::identity(format!("Couldn't parse client certificate: {e}")))?;
        if certs.is_empty() {
            return Err(FetchError::identity(
                "No certificate found in client certificate PEM",
            ));
        }

        let key = PrivateKeyDer::from_pem_slice(key_pem.as_bytes()).map_err(|e| match e {
            pem::Error::NoItemsFound => {
                FetchError::identity("No private key found in client key PEM")
            }
            e => FetchError::identity(format!("Couldn't parse client key: {e}")),
        })?;

        let chain_len = certs.len();
        let certified_key = CertifiedKey::from_der(certs, key, provider).map_err(|e| {
            FetchError::identity(format!("Client certificate and key don't match: {e}"))
        })?;

        debug!(chain_len, "client identity loaded");
        Ok(ClientIdentity { certified_key })
    }

    pub fn certificate_chain(&self) -> &[CertificateDer<'static>] {
        &self.certified_key.cert
    }
}

/// Builds a root store from a PEM bundle
///
/// Blocks that aren't parsable certificates are skipped, at least one usable certificate is required.
pub fn load_trust_anchors(ca_pem: &str) -> Result<RootCertStore> {
    let mut certs = Vec::new();
    for cert in CertificateDer::pem_slice_iter(ca_pem.as_bytes()) {
        match cert {
            Ok(cert) => certs.push(cert),
            Err(e) => warn!("Couldn't parse CA certificate, skipping it. Reason: {e}"),
        }
    }

    let mut roots = RootCertStore::empty();
    let (added, ignored) = roots.add_parsable_certificates(certs);
    debug!(added, ignored, "trust anchors loaded");

    if added == 0 {
        return Err(FetchError::trust_store("no usable CA certificate found"));
    }

    Ok(roots)
}
