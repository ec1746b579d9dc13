use reqwest::{
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
    redirect::Policy as RedirectPolicy,
};

use crate::errors::{ErrorKind, Result};

const REDIRECT_LIMIT: usize = 3;

/// Default headers carrying the bearer token of the API client.
pub(crate) fn bearer_headers(token: &str) -> Result<HeaderMap> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {token}")).map_err(ErrorKind::from)?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::with_capacity(1);
    headers.insert(AUTHORIZATION, auth);
    Ok(headers)
}

pub(crate) fn build_reqwest_client(token: &str, user_agent: &str) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .default_headers(bearer_headers(token)?)
        .brotli(true)
        .gzip(true)
        .zstd(true)
        .deflate(true)
        .user_agent(user_agent)
        .redirect(RedirectPolicy::limited(REDIRECT_LIMIT))
        .build()
        .map_err(ErrorKind::from)?)
}
