use crate::{error::Error, transport::RawResponse, OAuth2Error};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Outcome of a protocol operation.
///
/// `data` is only set for a 2xx status, `message` (the raw response body)
/// only for any other status. Status-only operations use `Response<()>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response<T = ()> {
    pub status: StatusCode,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Response<T> {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Parses the message of a failed call as an OAuth 2.0 error, if it is one.
    pub fn oauth2_error(&self) -> Option<OAuth2Error> {
        self.message
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }

    fn failed(raw: RawResponse) -> Self {
        Self {
            status: raw.status,
            data: None,
            message: Some(raw.body),
        }
    }
}

impl<T: DeserializeOwned> Response<T> {
    /// Parses a 2xx body into `T`; an unparseable 2xx body is an error.
    pub(crate) fn from_raw(raw: RawResponse) -> Result<Self, Error> {
        if !raw.is_success() {
            return Ok(Self::failed(raw));
        }
        let data = serde_json::from_str(&raw.body)?;
        Ok(Self {
            status: raw.status,
            data: Some(data),
            message: None,
        })
    }
}

impl Response<()> {
    /// Ignores the body of a 2xx response.
    pub(crate) fn status_only(raw: RawResponse) -> Self {
        if !raw.is_success() {
            return Self::failed(raw);
        }
        Self {
            status: raw.status,
            data: None,
            message: None,
        }
    }
}
