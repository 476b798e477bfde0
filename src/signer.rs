use crate::{error::SigningError, SigningCredential};
use biscuit::jwa::SignatureAlgorithm;
use biscuit::jws::{RegisteredHeader, Secret};
use biscuit::{ClaimsSet, Empty, RegisteredClaims, SingleOrMultiple, Timestamp, JWT};
use chrono::{Duration, Utc};
use serde::{de::DeserializeOwned, Serialize};

/// Registered claims shared by request objects and client assertions.
#[derive(Debug, Clone, Default)]
pub struct Registration {
    pub issuer: String,
    pub audience: String,
    pub subject: Option<String>,
    pub id: Option<String>,
}

/// Signs `claims` into a compact JWS.
///
/// `iss`, `aud`, `iat` and `exp = now + lifetime` are added to the payload and
/// the header carries `alg`, `typ: JWT` and the credential's `kid`.
pub fn sign<T>(
    claims: T,
    registration: Registration,
    credential: &SigningCredential,
    lifetime: Duration,
) -> Result<String, SigningError>
where
    T: Serialize + DeserializeOwned,
{
    check_algorithm(credential.secret(), credential.algorithm())?;

    let now = Utc::now();
    let claims = ClaimsSet {
        registered: RegisteredClaims {
            issuer: Some(registration.issuer),
            subject: registration.subject,
            audience: Some(SingleOrMultiple::Single(registration.audience)),
            expiry: Some(Timestamp::from(now + lifetime)),
            issued_at: Some(Timestamp::from(now)),
            id: registration.id,
            ..Default::default()
        },
        private: claims,
    };

    let header = RegisteredHeader {
        algorithm: credential.algorithm(),
        media_type: Some("JWT".to_string()),
        key_id: credential.key_id().map(str::to_string),
        ..Default::default()
    };

    let jwt = JWT::<T, Empty>::new_decoded(header.into(), claims)
        .into_encoded(credential.secret())
        .map_err(SigningError::Jose)?;
    let token = jwt.encoded().map_err(SigningError::Jose)?.encode();
    Ok(token)
}

fn check_algorithm(secret: &Secret, algorithm: SignatureAlgorithm) -> Result<(), SigningError> {
    match secret {
        Secret::RsaKeyPair(_) => match algorithm {
            SignatureAlgorithm::RS256
            | SignatureAlgorithm::RS384
            | SignatureAlgorithm::RS512
            | SignatureAlgorithm::PS256
            | SignatureAlgorithm::PS384
            | SignatureAlgorithm::PS512 => Ok(()),
            _ => Err(SigningError::UnsupportedAlgorithm {
                algorithm,
                key: "an RSA",
            }),
        },
        Secret::EcdsaKeyPair(_) => match algorithm {
            SignatureAlgorithm::ES256 => Ok(()),
            _ => Err(SigningError::UnsupportedAlgorithm {
                algorithm,
                key: "a P-256",
            }),
        },
        _ => Err(SigningError::MissingPrivateKey),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;
    use serde::Deserialize;

    #[derive(Serialize, Deserialize)]
    struct Custom {
        purpose: String,
    }

    fn registration() -> Registration {
        Registration {
            issuer: "client-1".into(),
            audience: "https://holder.example/idp".into(),
            ..Default::default()
        }
    }

    #[test]
    fn signs_registered_and_private_claims() {
        let before = Utc::now().timestamp();
        let token = sign(
            Custom {
                purpose: "testing".into(),
            },
            registration(),
            &test_support::signing_credential().with_key_id("kid-1"),
            Duration::seconds(300),
        )
        .unwrap();

        let (header, payload) = test_support::verify(&token);
        assert_eq!("PS256", header["alg"]);
        assert_eq!("JWT", header["typ"]);
        assert_eq!("kid-1", header["kid"]);
        assert_eq!("client-1", payload["iss"]);
        assert_eq!("https://holder.example/idp", payload["aud"]);
        assert_eq!("testing", payload["purpose"]);

        let exp = payload["exp"].as_i64().unwrap();
        assert!(exp >= before + 300);
        assert!(exp <= Utc::now().timestamp() + 300);
    }

    #[test]
    fn signs_with_ec_key() {
        let credential =
            SigningCredential::from_pem(test_support::SIGNING_EC_PEM, SignatureAlgorithm::ES256)
                .unwrap();
        let token = sign(Empty {}, registration(), &credential, Duration::seconds(60)).unwrap();

        let key = Secret::PublicKey(test_support::SIGNING_EC_PUBLIC_KEY.to_vec());
        let (header, claims) = test_support::verify_with(&token, &key, SignatureAlgorithm::ES256);
        assert_eq!("ES256", header["alg"]);
        assert_eq!(registration().issuer, claims["iss"]);

        let err = biscuit::JWT::<serde_json::Value, Empty>::new_encoded(&token)
            .decode(&test_support::verification_key(), SignatureAlgorithm::ES256);
        assert!(err.is_err());
    }

    #[test]
    fn rejects_algorithm_foreign_to_key() {
        let credential =
            SigningCredential::from_pem(test_support::SIGNING_RSA_PEM, SignatureAlgorithm::ES256)
                .unwrap();
        let err = sign(Empty {}, registration(), &credential, Duration::seconds(60)).unwrap_err();
        assert!(matches!(
            err,
            SigningError::UnsupportedAlgorithm {
                algorithm: SignatureAlgorithm::ES256,
                ..
            }
        ));
    }

    #[test]
    fn rejects_public_key() {
        let credential =
            SigningCredential::new(test_support::verification_key(), SignatureAlgorithm::PS256);
        let err = sign(Empty {}, registration(), &credential, Duration::seconds(60)).unwrap_err();
        assert!(matches!(err, SigningError::MissingPrivateKey));
    }
}
