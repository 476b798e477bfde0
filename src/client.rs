use crate::{
    claims::{AuthorisationClaims, AuthorisationRequest},
    discovered,
    error::Error,
    signer::{self, Registration},
    AccessTokenService, ClientCredential, Config, Introspection, Options, PrivateKeyJwtRequest,
    PrivateKeyJwtTokenService, PushedAuthorisation, Response, Token, TokenRequest, Transport,
    Userinfo, REFRESH_TOKEN,
};
use log::debug;
use url::Url;

/// CDR infosec client.
///
/// Every operation issues a single request and maps the answer into a
/// [`Response`]. Nothing is cached between calls except the mutual TLS
/// channels held by the [`Transport`].
#[derive(Clone)]
pub struct Client<A = PrivateKeyJwtTokenService> {
    transport: Transport,
    token_service: A,
}

impl Client {
    /// Creates a client that obtains access tokens with
    /// [`PrivateKeyJwtTokenService`].
    pub fn new(options: Options) -> Result<Self, Error> {
        let transport = Transport::new(options)?;
        Ok(Self {
            token_service: PrivateKeyJwtTokenService::new(transport.clone()),
            transport,
        })
    }
}

impl<A: AccessTokenService> Client<A> {
    pub fn with_token_service(transport: Transport, token_service: A) -> Self {
        Self {
            transport,
            token_service,
        }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn options(&self) -> &Options {
        self.transport.options()
    }

    /// Fetches the authorisation server's discovery document.
    pub async fn get_oidc_discovery(&self, infosec_base_uri: &Url) -> Result<Response<Config>, Error> {
        debug!("Request received to Client.get_oidc_discovery.");
        discovered::discover(&self.transport, infosec_base_uri).await
    }

    /// Registers a signed request object at the PAR endpoint.
    pub async fn pushed_authorisation_request(
        &self,
        par_endpoint: &Url,
        credential: &ClientCredential,
        request: &str,
        scope: &str,
    ) -> Result<Response<PushedAuthorisation>, Error> {
        debug!("Request received to Client.pushed_authorisation_request.");
        let raw = PrivateKeyJwtRequest::new(par_endpoint)
            .scope(scope)
            .field("request", request)
            .field("response_type", "code")
            .send(&self.transport, credential)
            .await?;
        Response::from_raw(raw)
    }

    /// Signs an authorisation request object. `infosec_base_uri` becomes the
    /// `aud` claim exactly as given.
    pub fn build_authorisation_request_jwt(
        &self,
        infosec_base_uri: &str,
        credential: &ClientCredential,
        request: &AuthorisationRequest,
    ) -> Result<String, Error> {
        debug!("Request received to Client.build_authorisation_request_jwt.");
        let claims = AuthorisationClaims::new(&credential.client_id, request);
        let token = signer::sign(
            claims,
            Registration {
                issuer: credential.client_id.clone(),
                audience: infosec_base_uri.to_string(),
                ..Default::default()
            },
            &credential.signing,
            self.options().assertion_lifetime(),
        )?;
        Ok(token)
    }

    /// Authorisation endpoint URI carrying a freshly signed request object.
    pub async fn build_authorisation_request_uri(
        &self,
        infosec_base_uri: &str,
        credential: &ClientCredential,
        request: &AuthorisationRequest,
    ) -> Result<Url, Error> {
        debug!("Request received to Client.build_authorisation_request_uri.");
        let base = Url::parse(infosec_base_uri)?;
        let jwt = self.build_authorisation_request_jwt(infosec_base_uri, credential, request)?;
        let config = self.require_discovery(&base).await?;

        let mut uri = config.authorization_endpoint;
        uri.query_pairs_mut()
            .append_pair("client_id", &credential.client_id)
            .append_pair("response_type", "code")
            .append_pair("scope", &request.scope)
            .append_pair("response_mode", "query")
            .append_pair("request", &jwt);
        Ok(uri)
    }

    /// Authorisation endpoint URI referencing a pushed request.
    pub async fn build_authorisation_request_uri_for_reference(
        &self,
        infosec_base_uri: &str,
        client_id: &str,
        scope: &str,
        request_uri: &str,
    ) -> Result<Url, Error> {
        debug!("Request received to Client.build_authorisation_request_uri_for_reference.");
        let config = self.require_discovery(&Url::parse(infosec_base_uri)?).await?;

        let mut uri = config.authorization_endpoint;
        uri.query_pairs_mut()
            .append_pair("client_id", client_id)
            .append_pair("response_type", "code")
            .append_pair("scope", scope)
            .append_pair("response_mode", "query")
            .append_pair("request_uri", request_uri);
        Ok(uri)
    }

    pub async fn get_access_token(
        &self,
        token_endpoint: &Url,
        credential: &ClientCredential,
        request: &TokenRequest,
    ) -> Result<Response<Token>, Error> {
        debug!("Request received to Client.get_access_token.");
        self.token_service
            .get_access_token(token_endpoint, credential, request)
            .await
    }

    pub async fn refresh_access_token(
        &self,
        token_endpoint: &Url,
        credential: &ClientCredential,
        scope: &str,
        refresh_token: &str,
        redirect_uri: &str,
    ) -> Result<Response<Token>, Error> {
        debug!("Request received to Client.refresh_access_token.");
        let raw = PrivateKeyJwtRequest::new(token_endpoint)
            .scope(scope)
            .grant_type(REFRESH_TOKEN)
            .field("refresh_token", refresh_token)
            .field("redirect_uri", redirect_uri)
            .send(&self.transport, credential)
            .await?;
        Response::from_raw(raw)
    }

    /// Revokes an access or refresh token. Any 2xx is a success.
    pub async fn revoke_token(
        &self,
        revocation_endpoint: &Url,
        credential: &ClientCredential,
        token_type_hint: &str,
        token: &str,
        access_token: &str,
    ) -> Result<Response, Error> {
        debug!("Request received to Client.revoke_token.");
        let raw = PrivateKeyJwtRequest::new(revocation_endpoint)
            .bearer(access_token)
            .field("token", token)
            .field("token_type_hint", token_type_hint)
            .send(&self.transport, credential)
            .await?;
        Ok(Response::status_only(raw))
    }

    /// Introspects a refresh token.
    pub async fn introspect(
        &self,
        introspection_endpoint: &Url,
        credential: &ClientCredential,
        refresh_token: &str,
        access_token: &str,
    ) -> Result<Response<Introspection>, Error> {
        debug!("Request received to Client.introspect.");
        let raw = PrivateKeyJwtRequest::new(introspection_endpoint)
            .bearer(access_token)
            .field("token", refresh_token)
            .field("token_type_hint", REFRESH_TOKEN)
            .send(&self.transport, credential)
            .await?;
        Response::from_raw(raw)
    }

    pub async fn user_info(
        &self,
        userinfo_endpoint: &Url,
        credential: &ClientCredential,
        access_token: &str,
    ) -> Result<Response<Userinfo>, Error> {
        debug!("Request received to Client.user_info.");
        let raw = self
            .transport
            .get(userinfo_endpoint, &credential.transport, Some(access_token))
            .await?;
        Response::from_raw(raw)
    }

    /// Withdraws consent for a whole arrangement. Any 2xx is a success.
    pub async fn revoke_cdr_arrangement(
        &self,
        arrangement_revocation_endpoint: &Url,
        credential: &ClientCredential,
        cdr_arrangement_id: &str,
        access_token: &str,
    ) -> Result<Response, Error> {
        debug!("Request received to Client.revoke_cdr_arrangement.");
        let raw = PrivateKeyJwtRequest::new(arrangement_revocation_endpoint)
            .bearer(access_token)
            .field("cdr_arrangement_id", cdr_arrangement_id)
            .send(&self.transport, credential)
            .await?;
        Ok(Response::status_only(raw))
    }

    /// Fetches a resource at the PAR endpoint with a bearer token.
    pub async fn pushed_authorization_request_get(
        &self,
        par_endpoint: &Url,
        credential: &ClientCredential,
        access_token: &str,
    ) -> Result<Response<serde_json::Value>, Error> {
        debug!("Request received to Client.pushed_authorization_request_get.");
        let raw = self
            .transport
            .get(par_endpoint, &credential.transport, Some(access_token))
            .await?;
        Response::from_raw(raw)
    }

    async fn require_discovery(&self, infosec_base_uri: &Url) -> Result<Config, Error> {
        let response = self.get_oidc_discovery(infosec_base_uri).await?;
        match response.data {
            Some(config) => Ok(config),
            None => Err(Error::Discovery {
                url: discovered::discovery_url(infosec_base_uri)?,
                status: response.status,
            }),
        }
    }
}
