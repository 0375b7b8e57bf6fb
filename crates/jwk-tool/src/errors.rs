/*!
 * Errors reported by the `jwk` binary
 */

use jwk_pem::JwkError;
use jwks_fetch::FetchError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Couldn't read {source_name}: {error}")]
    Input {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    #[error(transparent)]
    Jwk(#[from] JwkError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    pub(crate) fn input(source_name: impl Into<String>, error: std::io::Error) -> Self {
        CliError::Input {
            source_name: source_name.into(),
            error,
        }
    }
}
