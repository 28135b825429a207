use crate::config::ApiSettings;
use crate::error::{Error, Result};
use reqwest::header::HeaderMap;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// JSON GET client bound to one proxy path (e.g. `http://host/api/football`).
#[derive(Debug, Clone)]
pub struct ProxyFetcher {
    client: Client,
    base: url::Url,
    timeout_duration: Duration,
    user_agent: String,
}

/// Body and headers of a successful response.
#[derive(Debug)]
pub struct Fetched<T> {
    pub body: T,
    pub headers: HeaderMap,
}

/// Transport failure that still carries whatever headers the provider sent.
#[derive(Debug)]
pub struct FetchFailure {
    pub error: Error,
    pub headers: Option<HeaderMap>,
}

impl From<Error> for FetchFailure {
    fn from(error: Error) -> Self {
        Self { error, headers: None }
    }
}

impl ProxyFetcher {
    pub fn new(base_url: &str, proxy_path: &str) -> Result<Self> {
        Self::with_settings(&ApiSettings {
            base_url: base_url.to_string(),
            ..ApiSettings::default()
        }, proxy_path)
    }

    pub fn with_settings(settings: &ApiSettings, proxy_path: &str) -> Result<Self> {
        let base = proxy_url(&settings.base_url, proxy_path)?;
        let client = Client::builder()
            .timeout(settings.timeout())
            .gzip(true)
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base,
            timeout_duration: settings.timeout(),
            user_agent: settings.user_agent.clone(),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_duration = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    /// Build the full URL for `path` below the proxy prefix.
    pub fn url_for(&self, path: &str, query: &[(&str, String)]) -> Result<url::Url> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::InvalidUrl(self.base.to_string()))?;
            segments.pop_if_empty();
            for segment in path.split('/').filter(|s| !s.is_empty()) {
                segments.push(segment);
            }
        }
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// GET `path` and decode the JSON body.
    pub async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.get_json_with_headers(path, query)
            .await
            .map(|fetched| fetched.body)
            .map_err(|failure| failure.error)
    }

    /// Like [`get_json`](Self::get_json) but keeps the response headers on both paths.
    pub async fn get_json_with_headers<T>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> std::result::Result<Fetched<T>, FetchFailure>
    where
        T: DeserializeOwned,
    {
        let url = self.url_for(path, query)?;
        debug!("GET {}", url);

        let response = timeout(self.timeout_duration, self.fetch_response(&url))
            .await
            .map_err(|_| Error::Timeout(format!("Request to {} timed out", url)))??;

        let headers = response.headers().clone();
        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure {
                error: Error::Status { code: status.as_u16(), url: url.to_string() },
                headers: Some(headers),
            });
        }

        let bytes = response.bytes().await.map_err(|e| FetchFailure {
            error: Error::Http(format!("Failed to read response body: {}", e)),
            headers: Some(headers.clone()),
        })?;
        debug!("Downloaded {} bytes from {}", bytes.len(), url);

        match serde_json::from_slice(&bytes) {
            Ok(body) => Ok(Fetched { body, headers }),
            Err(e) => Err(FetchFailure {
                error: Error::Decode(format!("{}: {}", url, e)),
                headers: Some(headers),
            }),
        }
    }

    async fn fetch_response(&self, url: &url::Url) -> Result<Response> {
        let response = self
            .client
            .get(url.clone())
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(Error::from)?;

        Ok(response)
    }
}

fn proxy_url(base_url: &str, proxy_path: &str) -> Result<url::Url> {
    let joined = format!("{}{}", base_url.trim_end_matches('/'), proxy_path);
    let url = url::Url::parse(&joined)
        .map_err(|e| Error::InvalidUrl(format!("Invalid URL {}: {}", joined, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::InvalidUrl(format!("Unsupported scheme: {}", scheme))),
    }
}

/// Read a numeric header such as `x-requests-remaining`.
pub fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}
