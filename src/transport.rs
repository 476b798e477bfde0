use crate::{error::Error, Options, TransportCredential};
use dashmap::DashMap;
use log::{trace, warn};
use reqwest::{header::ACCEPT, Client, RequestBuilder, StatusCode};
use std::sync::Arc;
use url::Url;

/// Status and body of an HTTP exchange, returned whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Pool of HTTP channels.
///
/// Mutual TLS channels are keyed by the thumbprint of the client certificate
/// and built on first use. Cloning shares the pool.
///
/// Channels are never evicted on their own: the pool holds one entry per
/// certificate ever used. Call [`Transport::evict`] for a retired
/// certificate after rotation.
#[derive(Clone)]
pub struct Transport {
    options: Arc<Options>,
    mtls: Arc<DashMap<String, Client>>,
    discovery: Client,
}

impl Transport {
    pub fn new(options: Options) -> Result<Self, Error> {
        let mut builder = Client::builder().timeout(options.timeout());
        if options.accept_invalid_discovery_certs {
            warn!("server certificate validation is disabled for discovery requests");
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(Self {
            discovery: builder.build()?,
            mtls: Arc::new(DashMap::new()),
            options: Arc::new(options),
        })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Channel used for discovery documents only.
    pub(crate) fn discovery_client(&self) -> &Client {
        &self.discovery
    }

    /// Channel presenting `credential` as TLS client identity.
    pub fn client_for(&self, credential: &TransportCredential) -> Result<Client, Error> {
        if let Some(client) = self.mtls.get(credential.thumbprint()) {
            return Ok(client.clone());
        }

        let builder = Client::builder()
            .timeout(self.options.timeout())
            .identity(credential.identity()?);
        #[cfg(feature = "rustls")]
        let builder = builder.use_rustls_tls();
        let client = builder.build()?;

        trace!("built mtls channel for {}", credential.thumbprint());
        Ok(self
            .mtls
            .entry(credential.thumbprint().to_string())
            .or_insert(client)
            .clone())
    }

    /// Drops the pooled channel of `credential`. Returns whether one existed.
    /// Requests already in flight on it complete normally.
    pub fn evict(&self, credential: &TransportCredential) -> bool {
        let removed = self.mtls.remove(credential.thumbprint()).is_some();
        if removed {
            trace!("evicted mtls channel for {}", credential.thumbprint());
        }
        removed
    }

    pub async fn get(
        &self,
        url: &Url,
        credential: &TransportCredential,
        bearer: Option<&str>,
    ) -> Result<RawResponse, Error> {
        let request = self.client_for(credential)?.get(url.clone());
        execute(with_bearer(request, bearer)).await
    }

    pub async fn post_form(
        &self,
        url: &Url,
        credential: &TransportCredential,
        bearer: Option<&str>,
        form: &[(String, String)],
    ) -> Result<RawResponse, Error> {
        let request = self.client_for(credential)?.post(url.clone()).form(form);
        execute(with_bearer(request, bearer)).await
    }
}

fn with_bearer(request: RequestBuilder, bearer: Option<&str>) -> RequestBuilder {
    match bearer {
        Some(token) if !token.is_empty() => request.bearer_auth(token),
        _ => request,
    }
}

pub(crate) async fn execute(request: RequestBuilder) -> Result<RawResponse, Error> {
    let response = request.header(ACCEPT, "application/json").send().await?;
    let status = response.status();
    trace!("{} answered {}", response.url(), status);
    let body = response.text().await?;
    Ok(RawResponse { status, body })
}
