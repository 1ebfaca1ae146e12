use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::models::{GraphApiErrorResponse, MediaResponse};

pub const DEFAULT_BASE_URL: &str = "https://graph.instagram.com";
pub const MEDIA_PATH: &str = "/me/media";
pub const MEDIA_FIELDS: &str =
    "id,username,caption,media_type,media_url,permalink,thumbnail_url,timestamp";

/// Graph API connection for one access token.
pub struct Client {
    access_token: String,
    base_url: String,
    http: reqwest::Client,
}

impl Client {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_base_url(access_token, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// URL of the first media page.
    pub fn media_url(&self, limit: i64) -> Result<Url, FetchMediaError> {
        let raw = format!("{}{MEDIA_PATH}", self.base_url.trim_end_matches('/'));
        let mut url = Url::parse(&raw)
            .map_err(|source| FetchMediaError::InvalidUrl { url: raw.clone(), source })?;

        url.query_pairs_mut()
            .append_pair("access_token", &self.access_token)
            .append_pair("limit", &limit.to_string())
            .append_pair("fields", MEDIA_FIELDS);

        Ok(url)
    }

    /// Fetches one page of media.
    ///
    /// Without `next` the first page is requested; otherwise `next` is used as
    /// the request URL unmodified, since it already carries every parameter.
    pub async fn get_media(
        &self,
        limit: i64,
        next: Option<&str>,
    ) -> Result<MediaResponse, FetchMediaError> {
        let url = match next.filter(|next| !next.is_empty()) {
            Some(next) => next.to_owned(),
            None => self.media_url(limit)?.into(),
        };

        debug!(url = %redact_access_token(&url), "fetching media page");

        let (status, body) = self.fetch(&url).await?;

        if !status.is_success() {
            if let Ok(GraphApiErrorResponse { error }) =
                serde_json::from_str::<GraphApiErrorResponse>(&body)
            {
                return Err(FetchMediaError::Upstream { status, message: error.to_string() });
            }
        }

        serde_json::from_str(&body)
            .map_err(|source| FetchMediaError::Deserialize { body, source })
    }

    async fn fetch(&self, url: &str) -> Result<(StatusCode, String), FetchMediaError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| FetchMediaError::RequestSend { source })?;

        let status = response.status();

        let body = response
            .text()
            .await
            .map_err(|source| FetchMediaError::ResponseRead { source })?;

        Ok((status, body))
    }
}

/// Replaces the `access_token` query value so URLs can be logged.
pub fn redact_access_token(raw: &str) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return "<unparsable url>".to_owned();
    };

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "access_token" { "REDACTED".into() } else { value };
            (key.into_owned(), value.into_owned())
        })
        .collect();

    if !pairs.is_empty() {
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }

    url.into()
}

#[derive(Debug, Error)]
pub enum FetchMediaError {
    #[error("invalid media url {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("cannot fetch profile: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("unable to parse response: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },

    #[error("unable to unmarshal json response: {body}: {source}")]
    Deserialize {
        body: String,
        source: serde_json::Error,
    },

    #[error("graph api returned {status}: {message}")]
    Upstream {
        status: StatusCode,
        message: String,
    },
}
