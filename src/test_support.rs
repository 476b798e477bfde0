use crate::{ClientCredential, SigningCredential, TransportCredential};
use biscuit::jwa::SignatureAlgorithm;
use biscuit::jws::Secret;

pub const SIGNING_RSA_PEM: &str = include_str!("../tests/fixtures/signing_rsa.pem");
pub const SIGNING_RSA_PUBLIC_DER: &[u8] = include_bytes!("../tests/fixtures/signing_rsa_pub.der");
pub const SIGNING_EC_PEM: &str = include_str!("../tests/fixtures/signing_ec.pem");
/// Uncompressed P-256 point of [`SIGNING_EC_PEM`].
pub const SIGNING_EC_PUBLIC_KEY: &[u8] = include_bytes!("../tests/fixtures/signing_ec_pub.bin");
pub const CLIENT_CERT_PEM: &str = include_str!("../tests/fixtures/client.crt.pem");
pub const CLIENT_KEY_PEM: &str = include_str!("../tests/fixtures/client.key.pem");
pub const CLIENT_CERT_THUMBPRINT: &str = "CXoJwsk0WzYwQ1xa9xEUPy4iZ_xj49BTg17qv5yQnwI";

pub const CLIENT_ID: &str = "c7a5e0bb-3a4e-4c5f-9e49-5c1e0f1b2d3a";

pub fn signing_credential() -> SigningCredential {
    SigningCredential::from_pem(SIGNING_RSA_PEM, SignatureAlgorithm::PS256).unwrap()
}

pub fn transport_credential() -> TransportCredential {
    TransportCredential::from_pem(CLIENT_CERT_PEM, CLIENT_KEY_PEM).unwrap()
}

pub fn client_credential() -> ClientCredential {
    ClientCredential::new(CLIENT_ID, signing_credential(), transport_credential())
}

pub fn verification_key() -> Secret {
    Secret::PublicKey(SIGNING_RSA_PUBLIC_DER.to_vec())
}

/// Verifies a token signed by [`signing_credential`] and returns its header
/// and payload as JSON.
pub fn verify(token: &str) -> (serde_json::Value, serde_json::Value) {
    verify_with(token, &verification_key(), SignatureAlgorithm::PS256)
}

/// Verifies `token` against `key` and returns its header and payload as JSON.
pub fn verify_with(
    token: &str,
    key: &Secret,
    algorithm: SignatureAlgorithm,
) -> (serde_json::Value, serde_json::Value) {
    let jwt = biscuit::JWT::<serde_json::Value, biscuit::Empty>::new_encoded(token)
        .decode(key, algorithm)
        .unwrap();
    let header = serde_json::to_value(jwt.header().unwrap()).unwrap();
    let payload = serde_json::to_value(jwt.payload().unwrap()).unwrap();
    (header, payload)
}

/// Decodes a form body as sent on the wire.
pub fn form(body: &[u8]) -> Vec<(String, String)> {
    url::form_urlencoded::parse(body).into_owned().collect()
}

pub fn form_value<'a>(form: &'a [(String, String)], key: &str) -> Option<&'a str> {
    form.iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
