//! Instagram Graph API media access
//!
//! - `models`: page envelope returned by `/me/media`
//! - `index`: HTTP client fetching one page at a time
//! - `tags`: hashtag extraction from captions

pub mod index;
pub mod models;
pub mod tags;
