use crate::{
    error::Error, ClientCredential, Options, PrivateKeyJwtRequest, Response, Token, Transport,
    CDR_REGISTRATION_SCOPE, CLIENT_CREDENTIALS,
};
use async_trait::async_trait;
use url::Url;

/// Parameters of a token request. Derives Default, so remember to
/// `..Default::default()` after you specify what you want.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRequest {
    /// Default `cdr:registration`.
    pub scope: String,
    pub redirect_uri: Option<String>,
    /// Authorisation code, for the `authorization_code` grant.
    pub code: Option<String>,
    /// Default `client_credentials`.
    pub grant_type: String,
}

impl Default for TokenRequest {
    fn default() -> Self {
        Self {
            scope: CDR_REGISTRATION_SCOPE.to_string(),
            redirect_uri: None,
            code: None,
            grant_type: CLIENT_CREDENTIALS.to_string(),
        }
    }
}

/// Token request with the configured default scope and grant type.
impl From<&Options> for TokenRequest {
    fn from(options: &Options) -> Self {
        Self {
            scope: options.default_scope.clone(),
            grant_type: options.default_grant_type.clone(),
            ..Default::default()
        }
    }
}

impl TokenRequest {
    /// Exchange of an authorisation code.
    pub fn authorization_code(code: impl Into<String>, redirect_uri: impl Into<String>) -> Self {
        Self {
            scope: String::new(),
            redirect_uri: Some(redirect_uri.into()),
            code: Some(code.into()),
            grant_type: "authorization_code".to_string(),
        }
    }
}

/// Obtains access tokens on behalf of [`Client`](crate::Client).
#[async_trait]
pub trait AccessTokenService: Send + Sync {
    async fn get_access_token(
        &self,
        token_endpoint: &Url,
        credential: &ClientCredential,
        request: &TokenRequest,
    ) -> Result<Response<Token>, Error>;
}

/// Requests tokens from the token endpoint with `private_key_jwt` over
/// mutual TLS.
#[derive(Clone)]
pub struct PrivateKeyJwtTokenService {
    transport: Transport,
}

impl PrivateKeyJwtTokenService {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl AccessTokenService for PrivateKeyJwtTokenService {
    async fn get_access_token(
        &self,
        token_endpoint: &Url,
        credential: &ClientCredential,
        request: &TokenRequest,
    ) -> Result<Response<Token>, Error> {
        let mut jwt_request = PrivateKeyJwtRequest::new(token_endpoint)
            .scope(&request.scope)
            .grant_type(&request.grant_type);
        if let Some(ref redirect_uri) = request.redirect_uri {
            jwt_request = jwt_request.field("redirect_uri", redirect_uri.as_str());
        }
        if let Some(ref code) = request.code {
            jwt_request = jwt_request.field("code", code.as_str());
        }

        let raw = jwt_request.send(&self.transport, credential).await?;
        Response::from_raw(raw)
    }
}
