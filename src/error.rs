/*!
Client errors.

Transport, signing and credential failures are returned as [`Error`]. A
non-2xx answer from the authorisation server is not an error: it is carried
as data in [`Response`](crate::Response), and [`OAuth2Error`] can be parsed out
of its message.
*/
use biscuit::jwa::SignatureAlgorithm;
use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;
use url::Url;

pub use biscuit::errors::Error as Jose;
pub use reqwest::Error as Http;
pub use serde_json::Error as Json;

#[derive(Debug, Error)]
pub enum Error {
    /// Network, TLS or timeout failure. Never retried.
    #[error(transparent)]
    Http(#[from] Http),
    #[error(transparent)]
    Json(#[from] Json),
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Signing(#[from] SigningError),
    #[error(transparent)]
    Credential(#[from] CredentialError),
    #[error("Url: Path segments is cannot-be-a-base")]
    CannotBeABase,
    /// A discovery document was required but the server did not return one.
    #[error("Discovery of '{url}' failed with status {status}")]
    Discovery { url: Url, status: StatusCode },
}

/// Failure while producing a signed assertion.
#[derive(Debug, Error)]
pub enum SigningError {
    #[error("Algorithm {algorithm:?} cannot be used with {key} key")]
    UnsupportedAlgorithm {
        algorithm: SignatureAlgorithm,
        key: &'static str,
    },
    #[error("Signing credential has no private key")]
    MissingPrivateKey,
    #[error("{0}")]
    Jose(#[source] Jose),
}

/// Failure while loading key or certificate material.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("No PEM block labelled '{0}' found")]
    MissingPemBlock(&'static str),
    #[error("Malformed PEM: {0}")]
    MalformedPem(String),
    #[error("Encrypted private keys are not supported, decrypt the key first")]
    EncryptedKey,
    #[error("Unsupported private key type '{0}'")]
    UnsupportedKey(String),
    #[error("Private key rejected: {0}")]
    KeyRejected(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Invalid TLS identity: {0}")]
    Identity(#[source] Http),
}

/// Error body returned by the token, revocation, introspection and PAR
/// endpoints.
///
/// See [RFC 6749, section 5.2](https://datatracker.ietf.org/doc/html/rfc6749#section-5.2).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OAuth2Error {
    pub error: OAuth2ErrorCode,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub error_uri: Option<String>,
}

impl fmt::Display for OAuth2Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.error.as_str())?;
        match (&self.error_description, &self.error_uri) {
            (Some(description), Some(uri)) => write!(f, ": {} <{}>", description, uri),
            (Some(description), None) => write!(f, ": {}", description),
            (None, Some(uri)) => write!(f, " <{}>", uri),
            (None, None) => Ok(()),
        }
    }
}

impl std::error::Error for OAuth2Error {}

/// `error` member of an [`OAuth2Error`].
///
/// Covers RFC 6749 plus `unsupported_token_type` (RFC 7009) and
/// `invalid_request_object` (RFC 9126).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "String")]
pub enum OAuth2ErrorCode {
    InvalidRequest,
    /// Client assertion or mutual TLS authentication was rejected.
    InvalidClient,
    /// Authorisation code or refresh token is invalid, expired or revoked.
    InvalidGrant,
    UnauthorizedClient,
    UnsupportedGrantType,
    InvalidScope,
    UnsupportedTokenType,
    InvalidRequestObject,
    /// Any other code, kept verbatim.
    Unrecognized(String),
}

impl OAuth2ErrorCode {
    /// Wire form of the code.
    pub fn as_str(&self) -> &str {
        match self {
            OAuth2ErrorCode::InvalidRequest => "invalid_request",
            OAuth2ErrorCode::InvalidClient => "invalid_client",
            OAuth2ErrorCode::InvalidGrant => "invalid_grant",
            OAuth2ErrorCode::UnauthorizedClient => "unauthorized_client",
            OAuth2ErrorCode::UnsupportedGrantType => "unsupported_grant_type",
            OAuth2ErrorCode::InvalidScope => "invalid_scope",
            OAuth2ErrorCode::UnsupportedTokenType => "unsupported_token_type",
            OAuth2ErrorCode::InvalidRequestObject => "invalid_request_object",
            OAuth2ErrorCode::Unrecognized(code) => code.as_str(),
        }
    }
}

impl From<String> for OAuth2ErrorCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            "invalid_request" => OAuth2ErrorCode::InvalidRequest,
            "invalid_client" => OAuth2ErrorCode::InvalidClient,
            "invalid_grant" => OAuth2ErrorCode::InvalidGrant,
            "unauthorized_client" => OAuth2ErrorCode::UnauthorizedClient,
            "unsupported_grant_type" => OAuth2ErrorCode::UnsupportedGrantType,
            "invalid_scope" => OAuth2ErrorCode::InvalidScope,
            "unsupported_token_type" => OAuth2ErrorCode::UnsupportedTokenType,
            "invalid_request_object" => OAuth2ErrorCode::InvalidRequestObject,
            _ => OAuth2ErrorCode::Unrecognized(code),
        }
    }
}
