use crate::{
    error::Error,
    transport::{self, Transport},
    Config, Response,
};
use log::debug;
use url::Url;

/// Location of the discovery document below `base`, ignoring a trailing `/`.
pub fn discovery_url(base: &Url) -> Result<Url, Error> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| Error::CannotBeABase)?
        .pop_if_empty()
        .extend(&[".well-known", "openid-configuration"]);
    Ok(url)
}

/// Fetches the discovery document. A non-2xx answer is returned as a failed
/// [`Response`], not as an error.
pub async fn discover(transport: &Transport, base: &Url) -> Result<Response<Config>, Error> {
    let url = discovery_url(base)?;
    debug!("fetching discovery document {}", url);
    let raw = transport::execute(transport.discovery_client().get(url)).await?;
    Response::from_raw(raw)
}
