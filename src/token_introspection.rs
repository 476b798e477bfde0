use crate::deserializers::bool_from_str_or_bool;
use serde::{Deserialize, Serialize};

/// Introspection response for a refresh token.
///
/// See [RFC 7662, section 2.2](https://datatracker.ietf.org/doc/html/rfc7662#section-2.2).
/// Data holders only return `active`, `exp`, `scope` and `cdr_arrangement_id`
/// for refresh tokens; the remaining members are kept for servers that add them.
#[derive(Debug, Deserialize, Serialize, Clone, Eq, PartialEq)]
pub struct Introspection {
    #[serde(default, deserialize_with = "bool_from_str_or_bool")]
    /// Boolean indicator of whether or not the presented token is currently active.
    pub active: bool,

    #[serde(default)]
    /// Expiry of the token, seconds since the epoch.
    pub exp: Option<i64>,

    #[serde(default)]
    pub scope: Option<String>,

    #[serde(default)]
    /// Arrangement the refresh token belongs to.
    pub cdr_arrangement_id: Option<String>,

    #[serde(default)]
    pub client_id: Option<String>,

    #[serde(default)]
    pub token_type: Option<String>,

    #[serde(default)]
    pub sub: Option<String>,

    #[serde(default)]
    pub iss: Option<String>,
}
