use serde::{Deserialize, Serialize};

/// Parameters of an authorisation request. Derives Default, so remember to
/// `..Default::default()` after you specify what you want.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorisationRequest {
    pub redirect_uri: String,
    pub scope: String,
    pub state: String,
    pub nonce: String,
    /// Default `query`.
    pub response_mode: String,
    /// Requested consent duration in seconds. Default `Some(0)`, a one-off
    /// consent.
    pub sharing_duration: Option<u64>,
    /// Existing arrangement to amend, if any.
    pub cdr_arrangement_id: Option<String>,
}

impl Default for AuthorisationRequest {
    fn default() -> Self {
        Self {
            redirect_uri: String::new(),
            scope: String::new(),
            state: String::new(),
            nonce: String::new(),
            response_mode: "query".to_string(),
            sharing_duration: Some(0),
            cdr_arrangement_id: None,
        }
    }
}

/// Private claims of the authorisation request object.
///
/// Values are carried verbatim: the authorisation server validates them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthorisationClaims {
    pub response_type: String,
    pub client_id: String,
    pub redirect_uri: String,
    pub response_mode: String,
    pub scope: String,
    pub state: String,
    pub nonce: String,
    pub claims: SharingClaims,
}

/// The nested `claims` request parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SharingClaims {
    pub sharing_duration: Option<u64>,
    pub cdr_arrangement_id: Option<String>,
}

impl AuthorisationClaims {
    pub fn new(client_id: &str, request: &AuthorisationRequest) -> Self {
        Self {
            response_type: "code".to_string(),
            client_id: client_id.to_string(),
            redirect_uri: request.redirect_uri.clone(),
            response_mode: request.response_mode.clone(),
            scope: request.scope.clone(),
            state: request.state.clone(),
            nonce: request.nonce.clone(),
            claims: SharingClaims {
                sharing_duration: request.sharing_duration,
                cdr_arrangement_id: request.cdr_arrangement_id.clone(),
            },
        }
    }
}
