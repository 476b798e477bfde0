use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Client configuration. Derives Default, so remember to `..Default::default()`
/// after you specify what you want.
///
/// Deserializable so it can be embedded in an application's own settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Options {
    /// Lifetime in seconds of request objects and client assertions. Default `300`.
    pub assertion_lifetime: u32,
    /// Whole-request timeout in seconds for every HTTP call. Default `30`.
    pub timeout: u64,
    /// Skip server certificate validation when fetching the discovery
    /// document. Default `false`; only meant for test environments with
    /// self-signed authorisation servers.
    pub accept_invalid_discovery_certs: bool,
    /// `grant_type` sent with a private_key_jwt request when the caller does
    /// not set one. Default `client_credentials`.
    pub default_grant_type: String,
    /// Scope of a [`TokenRequest`](crate::TokenRequest) built from these options.
    /// Default `cdr:registration`.
    pub default_scope: String,
}

pub const CLIENT_CREDENTIALS: &str = "client_credentials";
pub const REFRESH_TOKEN: &str = "refresh_token";
pub const CDR_REGISTRATION_SCOPE: &str = "cdr:registration";

impl Default for Options {
    fn default() -> Self {
        Self {
            assertion_lifetime: 300,
            timeout: 30,
            accept_invalid_discovery_certs: false,
            default_grant_type: CLIENT_CREDENTIALS.to_string(),
            default_scope: CDR_REGISTRATION_SCOPE.to_string(),
        }
    }
}

impl Options {
    pub(crate) fn assertion_lifetime(&self) -> Duration {
        Duration::seconds(i64::from(self.assertion_lifetime))
    }

    pub(crate) fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout)
    }
}
