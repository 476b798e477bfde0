use chrono::{DateTime, Duration, Utc};
use serde::{de::Visitor, Deserialize, Deserializer};
use std::fmt;

/// Token endpoint response.
///
/// See [RFC 6749, section 5.1](http://tools.ietf.org/html/rfc6749#section-5.1).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
    /// Present when the token was issued against a consent arrangement.
    #[serde(default)]
    pub cdr_arrangement_id: Option<String>,
    #[serde(
        default,
        rename = "expires_in",
        deserialize_with = "expire_in_to_instant"
    )]
    pub expires: Option<DateTime<Utc>>,
}

fn expire_in_to_instant<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ExpireInVisitor;

    impl<'de> Visitor<'de> for ExpireInVisitor {
        type Value = Option<DateTime<Utc>>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer containing seconds")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, d: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let expire_in: u32 = serde::de::Deserialize::deserialize(d)?;
            Ok(Some(Utc::now() + Duration::seconds(i64::from(expire_in))))
        }
    }

    deserializer.deserialize_option(ExpireInVisitor)
}

impl Token {
    pub fn expired(&self) -> bool {
        if let Some(expires) = self.expires {
            expires < Utc::now()
        } else {
            false
        }
    }
}
