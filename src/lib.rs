/*!
# Consumer Data Right infosec client

Client side of the [CDR information security profile](https://consumerdatastandardsaustralia.github.io/standards/#security-profile):
the OAuth 2.0 / OpenID Connect calls a data recipient makes against a data holder's
authorisation server.

## Features

- OpenID Connect Discovery 1.0 (`/.well-known/openid-configuration`).
- `private_key_jwt` client authentication ([RFC 7523](https://datatracker.ietf.org/doc/html/rfc7523)) over mutual TLS.
- Signed authorisation request objects, plain or pushed ([RFC 9126](https://datatracker.ietf.org/doc/html/rfc9126)).
- Token, refresh, revocation, introspection, userinfo and CDR arrangement revocation.

Using [reqwest](https://crates.io/crates/reqwest) for the HTTP client and [biscuit](https://crates.io/crates/biscuit) for Javascript Object Signing and Encryption (JOSE).
TLS comes from `native-tls` (default) or `rustls`.

Every operation returns a [`Response`]: the HTTP status, the parsed body for a 2xx
answer, and the raw body as `message` otherwise. Only transport, signing and
credential failures are reported as [`error::Error`].

## Usage

```rust,ignore
use cdr_infosec::{
    AuthorisationRequest, Client, ClientCredential, Options, SignatureAlgorithm,
    SigningCredential, TransportCredential,
};
use url::Url;

let client = Client::new(Options::default())?;
let credential = ClientCredential::new(
    "c7a5e0bb-3a4e-4c5f-9e49-5c1e0f1b2d3a",
    SigningCredential::from_pem_file("signing.pem", SignatureAlgorithm::PS256)?.with_key_id("7c5dm"),
    TransportCredential::from_pem_files("client.crt.pem", "client.key.pem")?,
);

let holder = "https://holder.example/idp";
let discovery = client.get_oidc_discovery(&Url::parse(holder)?).await?;
let config = discovery.data.expect("discovery document");

let request = AuthorisationRequest {
    redirect_uri: "https://recipient.example/consent/callback".into(),
    scope: "openid profile bank:accounts.basic:read".into(),
    state: "af0ifjsldkj".into(),
    nonce: "n-0S6_WzA2Mj".into(),
    sharing_duration: Some(7776000),
    ..Default::default()
};

let jwt = client.build_authorisation_request_jwt(holder, &credential, &request)?;
let par_endpoint = config.pushed_authorization_request_endpoint.expect("PAR endpoint");
let pushed = client
    .pushed_authorisation_request(&par_endpoint, &credential, &jwt, &request.scope)
    .await?;

if let Some(pushed) = pushed.data {
    let redirect = client
        .build_authorisation_request_uri_for_reference(
            holder,
            &credential.client_id,
            &request.scope,
            &pushed.request_uri,
        )
        .await?;
    println!("send the user to {}", redirect);
}
```
*/
#[cfg(not(any(feature = "native-tls", feature = "rustls")))]
compile_error!("one of the `native-tls` or `rustls` features must be enabled");

mod access_token;
mod claims;
mod client;
mod config;
mod credential;
mod deserializers;
mod discovered;
pub mod error;
mod options;
mod private_key_jwt;
mod pushed_authorisation;
mod response;
pub mod signer;
mod token;
mod token_introspection;
mod transport;
mod userinfo;

#[cfg(test)]
mod test_support;

pub use ::biscuit::jwa::SignatureAlgorithm;
pub use ::biscuit::SingleOrMultiple;
pub use access_token::{AccessTokenService, PrivateKeyJwtTokenService, TokenRequest};
pub use claims::{AuthorisationClaims, AuthorisationRequest, SharingClaims};
pub use client::Client;
pub use config::Config;
pub use credential::{ClientCredential, SigningCredential, TransportCredential};
pub use discovered::{discover, discovery_url};
pub use error::{OAuth2Error, OAuth2ErrorCode};
pub use options::{Options, CDR_REGISTRATION_SCOPE, CLIENT_CREDENTIALS, REFRESH_TOKEN};
pub use private_key_jwt::{PrivateKeyJwtRequest, CLIENT_ASSERTION_TYPE};
pub use pushed_authorisation::PushedAuthorisation;
pub use response::Response;
pub use token::Token;
pub use token_introspection::Introspection;
pub use transport::{RawResponse, Transport};
pub use userinfo::Userinfo;

/// Reimport `biscuit` dependency.
pub mod biscuit {
    pub use biscuit::*;
}
