// modpack-rs: Modpack release tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! JSON API transport.
//!
//! ```text
//! ApiClient::new(base_url)
//!   .header() .header()
//!        |
//!        +-------------+
//!        v             v
//!   get_json()    post_json()
//!        |
//!        v
//!   status check --> HttpError
//!   body decode  --> Decode
//!
//! Global client: OnceLock, connection pool, keep-alive
//! ```

use std::sync::OnceLock;

use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::error::NetworkError;

/// Global HTTP client - initialized once, reused across all API clients.
/// Falls back to a basic client if custom configuration fails.
fn global_client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(format!("modpack-rs/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// HTTP client bound to one API base URL.
///
/// # Example
/// ```ignore
/// use modpack_rs::net::ApiClient;
///
/// let api = ApiClient::new("https://api.modrinth.com/v2")
///     .header("User-Agent", "me/my-pack");
/// let project: serde_json::Value = api.get_json("/project/AANobbMI", &[]).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    headers: Vec<(String, String)>,
}

impl ApiClient {
    /// Create a client for `base_url`; a trailing `/` is ignored.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: global_client().clone(),
            base_url,
            headers: Vec::new(),
        }
    }

    /// Add a header sent with every request.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the absolute URL for `path`, appending `query` pairs url-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidUrl`] if the result is not a valid URL.
    pub fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, NetworkError> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut url = Url::parse(&raw).map_err(|e| NetworkError::InvalidUrl(format!("{raw}: {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Build the URL for `path` followed by `segment` as one path segment.
    ///
    /// `segment` is percent-encoded, so `/`, `?` or `#` in it stay inside
    /// the segment.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::InvalidUrl`] if the base URL cannot hold path
    /// segments.
    pub fn segment_url(&self, path: &str, segment: &str) -> Result<Url, NetworkError> {
        let mut url = self.url(path, &[])?;
        url.path_segments_mut()
            .map_err(|()| NetworkError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    fn with_headers(&self, mut request: RequestBuilder) -> RequestBuilder {
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        request
    }

    /// `GET` a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the request fails, the server
    /// answers with a non-success status, or the body is not valid JSON for `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, NetworkError> {
        self.get_json_at(self.url(path, query)?).await
    }

    /// `GET` a JSON document from a URL built with [`Self::url`] or
    /// [`Self::segment_url`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the body is not valid JSON for `T`.
    pub async fn get_json_at<T: DeserializeOwned>(&self, url: Url) -> Result<T, NetworkError> {
        trace!(%url, "GET");
        let request = self.with_headers(self.client.get(url.clone()));
        Self::send(request, &url).await
    }

    /// `POST` a JSON body and decode a JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the request fails, the server
    /// answers with a non-success status, or the body is not valid JSON for `T`.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, NetworkError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path, &[])?;
        trace!(%url, "POST");
        let request = self.with_headers(self.client.post(url.clone()).json(body));
        Self::send(request, &url).await
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder, url: &Url) -> Result<T, NetworkError> {
        let response = request.send().await.map_err(NetworkError::Reqwest)?;

        if !response.status().is_success() {
            return Err(NetworkError::HttpError {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let text = response.text().await.map_err(NetworkError::Reqwest)?;
        serde_json::from_str(&text).map_err(|e| NetworkError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
