use crate::SingleOrMultiple;
use serde::{Deserialize, Serialize};

/// The userinfo struct carries the claims a data holder releases for a
/// consent. See the [CDR token standards](https://consumerdatastandardsaustralia.github.io/standards/#tokens).
#[derive(Debug, Deserialize, Serialize, Clone, Eq, PartialEq)]
pub struct Userinfo {
    #[serde(default)]
    /// Subject - pairwise identifier for the End-User at the data holder.
    pub sub: Option<String>,
    #[serde(default)]
    /// End-User's full name in displayable form.
    pub name: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    /// Authentication context class the End-User was authenticated with.
    pub acr: Option<String>,
    #[serde(default)]
    pub auth_time: Option<i64>,
    #[serde(default)]
    pub iss: Option<String>,
    #[serde(default)]
    pub aud: Option<SingleOrMultiple<String>>,
    #[serde(default)]
    pub updated_at: Option<i64>,
    // CDR additions, seconds since the epoch.
    #[serde(default)]
    pub refresh_token_expires_at: Option<i64>,
    #[serde(default)]
    /// When the sharing arrangement ends. `0` for a one-off consent.
    pub sharing_expires_at: Option<i64>,
}
