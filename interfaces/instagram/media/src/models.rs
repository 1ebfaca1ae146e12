use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tags::hashtags;

/// One media post as returned by the Graph API.
///
/// Fields the upstream omits (images carry no `thumbnail_url`, posts without
/// caption carry no `caption`) deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub media_url: String,
    #[serde(default)]
    pub permalink: String,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub timestamp: String,
}

impl Entry {
    /// Hashtags found in the caption, in order of appearance.
    pub fn tags(&self) -> Vec<&str> {
        hashtags(&self.caption)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Entry{{ID: {}, Username: {}, Caption: {}, MediaType: {}, MediaURL: {}, Permalink: {}, ThumbnailURL: {}, Timestamp: {}}}",
            self.id,
            self.username,
            self.caption,
            self.media_type,
            self.media_url,
            self.permalink,
            self.thumbnail_url,
            self.timestamp,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Cursors {
    #[serde(default)]
    pub before: String,
    #[serde(default)]
    pub after: String,
}

/// Paging block of a media page.
///
/// `next` is missing on the last page and `previous` on the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub cursors: Cursors,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

impl Paging {
    /// URL of the following page. An empty `next` counts as absent.
    pub fn next_page(&self) -> Option<&str> {
        self.next.as_deref().filter(|next| !next.is_empty())
    }
}

/// One fetched page of media.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MediaResponse {
    pub data: Vec<Entry>,
    #[serde(default)]
    pub paging: Paging,
}

/// Error envelope the Graph API sends with non-success statuses.
#[derive(Debug, Deserialize)]
pub struct GraphApiErrorResponse {
    pub error: GraphApiError,
}

#[derive(Debug, Deserialize)]
pub struct GraphApiError {
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
}

impl fmt::Display for GraphApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind.as_deref(), self.code) {
            (Some(kind), Some(code)) => write!(f, "{} ({kind}, code {code})", self.message),
            (Some(kind), None) => write!(f, "{} ({kind})", self.message),
            (None, Some(code)) => write!(f, "{} (code {code})", self.message),
            (None, None) => f.write_str(&self.message),
        }
    }
}
