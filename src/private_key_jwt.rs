/*!
`private_key_jwt` client authentication over mutual TLS.

See [RFC 7523, section 2.2](https://datatracker.ietf.org/doc/html/rfc7523#section-2.2).
*/
use crate::{
    error::Error,
    signer::{self, Registration},
    transport::{RawResponse, Transport},
    ClientCredential,
};
use biscuit::Empty;
use chrono::Duration;
use url::Url;
use uuid::Uuid;

pub const CLIENT_ASSERTION_TYPE: &str = "urn:ietf:params:oauth:client-assertion-type:jwt-bearer";

/// A form POST authenticated with a client assertion.
///
/// # Examples
///
/// ```no_run
/// # async fn revoke(transport: &cdr_infosec::Transport, credential: &cdr_infosec::ClientCredential) -> Result<(), cdr_infosec::error::Error> {
/// use cdr_infosec::PrivateKeyJwtRequest;
/// use url::Url;
///
/// let endpoint = Url::parse("https://holder.example/idp/connect/revocation")?;
/// let response = PrivateKeyJwtRequest::new(&endpoint)
///     .field("token", "abc")
///     .field("token_type_hint", "access_token")
///     .send(transport, credential)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PrivateKeyJwtRequest<'a> {
    endpoint: &'a Url,
    scope: Option<&'a str>,
    grant_type: Option<&'a str>,
    bearer: Option<&'a str>,
    fields: Vec<(String, String)>,
}

impl<'a> PrivateKeyJwtRequest<'a> {
    pub fn new(endpoint: &'a Url) -> Self {
        Self {
            endpoint,
            scope: None,
            grant_type: None,
            bearer: None,
            fields: Vec::new(),
        }
    }

    /// Sent as `scope` unless empty.
    pub fn scope(mut self, scope: &'a str) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Overrides the configured default `grant_type`.
    pub fn grant_type(mut self, grant_type: &'a str) -> Self {
        self.grant_type = Some(grant_type);
        self
    }

    /// Adds an `Authorization: Bearer` header.
    pub fn bearer(mut self, access_token: &'a str) -> Self {
        self.bearer = Some(access_token);
        self
    }

    /// Adds a form field. Caller fields win over the generated ones.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Builds the form body, signing a fresh client assertion.
    pub fn form(
        &self,
        credential: &ClientCredential,
        default_grant_type: &str,
        lifetime: Duration,
    ) -> Result<Vec<(String, String)>, Error> {
        let assertion = signer::sign(
            Empty {},
            Registration {
                issuer: credential.client_id.clone(),
                subject: Some(credential.client_id.clone()),
                audience: self.endpoint.to_string(),
                id: Some(Uuid::new_v4().to_string()),
            },
            &credential.signing,
            lifetime,
        )?;

        let mut form = vec![
            ("client_id".to_string(), credential.client_id.clone()),
            (
                "client_assertion_type".to_string(),
                CLIENT_ASSERTION_TYPE.to_string(),
            ),
            ("client_assertion".to_string(), assertion),
            (
                "grant_type".to_string(),
                self.grant_type.unwrap_or(default_grant_type).to_string(),
            ),
        ];
        if let Some(scope) = self.scope.filter(|scope| !scope.is_empty()) {
            form.push(("scope".to_string(), scope.to_string()));
        }

        for (name, value) in &self.fields {
            match form.iter().position(|(existing, _)| existing == name) {
                Some(index) => form[index].1 = value.clone(),
                None => form.push((name.clone(), value.clone())),
            }
        }

        Ok(form)
    }

    /// POSTs the form over the credential's mutual TLS channel and returns the
    /// response as is.
    pub async fn send(
        self,
        transport: &Transport,
        credential: &ClientCredential,
    ) -> Result<RawResponse, Error> {
        let options = transport.options();
        let form = self.form(
            credential,
            &options.default_grant_type,
            options.assertion_lifetime(),
        )?;
        transport
            .post_form(self.endpoint, &credential.transport, self.bearer, &form)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{self, form_value};
    use crate::Options;
    use reqwest::StatusCode;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn endpoint() -> Url {
        Url::parse("https://holder.example/idp/connect/token").unwrap()
    }

    #[test]
    fn form_carries_assertion_and_caller_fields() {
        let endpoint = endpoint();
        let credential = test_support::client_credential();
        let form = PrivateKeyJwtRequest::new(&endpoint)
            .field("token", "abc")
            .field("token_type_hint", "access_token")
            .form(&credential, "client_credentials", Duration::seconds(300))
            .unwrap();

        assert_eq!(Some(test_support::CLIENT_ID), form_value(&form, "client_id"));
        assert_eq!(
            Some(CLIENT_ASSERTION_TYPE),
            form_value(&form, "client_assertion_type")
        );
        assert_eq!(Some("client_credentials"), form_value(&form, "grant_type"));
        assert_eq!(Some("abc"), form_value(&form, "token"));
        assert_eq!(Some("access_token"), form_value(&form, "token_type_hint"));
        assert_eq!(None, form_value(&form, "scope"));

        let (_, claims) = test_support::verify(form_value(&form, "client_assertion").unwrap());
        assert_eq!(test_support::CLIENT_ID, claims["iss"]);
        assert_eq!(test_support::CLIENT_ID, claims["sub"]);
        assert_eq!("https://holder.example/idp/connect/token", claims["aud"]);
        assert!(Uuid::parse_str(claims["jti"].as_str().unwrap()).is_ok());
        assert!(claims["exp"].as_i64().is_some());
    }

    #[test]
    fn caller_fields_take_precedence() {
        let endpoint = endpoint();
        let form = PrivateKeyJwtRequest::new(&endpoint)
            .grant_type("refresh_token")
            .scope("openid")
            .field("grant_type", "authorization_code")
            .field("client_id", "override")
            .form(
                &test_support::client_credential(),
                "client_credentials",
                Duration::seconds(300),
            )
            .unwrap();

        assert_eq!(Some("authorization_code"), form_value(&form, "grant_type"));
        assert_eq!(Some("override"), form_value(&form, "client_id"));
        assert_eq!(Some("openid"), form_value(&form, "scope"));
        assert_eq!(1, form.iter().filter(|(k, _)| k == "grant_type").count());
    }

    #[test]
    fn empty_scope_is_omitted() {
        let endpoint = endpoint();
        let form = PrivateKeyJwtRequest::new(&endpoint)
            .scope("")
            .form(
                &test_support::client_credential(),
                "client_credentials",
                Duration::seconds(300),
            )
            .unwrap();
        assert_eq!(None, form_value(&form, "scope"));
    }

    #[test]
    fn fresh_jti_per_assertion() {
        let endpoint = endpoint();
        let credential = test_support::client_credential();
        let request = PrivateKeyJwtRequest::new(&endpoint);
        let jti = |form: Vec<(String, String)>| {
            let (_, claims) = test_support::verify(form_value(&form, "client_assertion").unwrap());
            claims["jti"].as_str().unwrap().to_string()
        };

        let first = jti(request.form(&credential, "x", Duration::seconds(60)).unwrap());
        let second = jti(request.form(&credential, "x", Duration::seconds(60)).unwrap());
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn send_posts_form_and_returns_response_untouched() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/connect/revocation"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(header("authorization", "Bearer at-1"))
            .respond_with(ResponseTemplate::new(400).set_body_string("{\"error\":\"invalid_client\"}"))
            .expect(1)
            .mount(&server)
            .await;

        let endpoint = Url::parse(&format!("{}/connect/revocation", server.uri())).unwrap();
        let transport = Transport::new(Options::default()).unwrap();
        let response = PrivateKeyJwtRequest::new(&endpoint)
            .bearer("at-1")
            .field("token", "abc")
            .send(&transport, &test_support::client_credential())
            .await
            .unwrap();

        assert_eq!(StatusCode::BAD_REQUEST, response.status);
        assert_eq!("{\"error\":\"invalid_client\"}", response.body);

        let requests = server.received_requests().await.unwrap();
        let form = test_support::form(&requests[0].body);
        assert_eq!(Some("abc"), form_value(&form, "token"));
        assert_eq!(Some(CLIENT_ASSERTION_TYPE), form_value(&form, "client_assertion_type"));
    }
}
