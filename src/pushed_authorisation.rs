use serde::{Deserialize, Serialize};

/// Pushed authorisation response.
///
/// See [RFC 9126, section 2.2](https://datatracker.ietf.org/doc/html/rfc9126#section-2.2).
#[derive(Debug, Deserialize, Serialize, Clone, Eq, PartialEq)]
pub struct PushedAuthorisation {
    /// Reference to pass as `request_uri` to the authorisation endpoint.
    pub request_uri: String,
    /// Lifetime of `request_uri` in seconds.
    #[serde(default)]
    pub expires_in: Option<u64>,
}
