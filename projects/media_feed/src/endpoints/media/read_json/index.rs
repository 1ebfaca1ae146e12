use std::num::IntErrorKind;

use axum::{
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use interfaces_instagram_media::{
	index::{Client, FetchMediaError},
	models::{Entry, MediaResponse},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use crate::router::AppState;

/// Query parameters for the endpoint.
#[derive(Debug, Default)]
pub struct MediaReadJsonQuery {
	limit: Option<String>,
}

impl MediaReadJsonQuery {
	/// Keeps the first occurrence of each known key; repeated keys never reject the request.
	pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
		let limit = pairs.into_iter().find(|(key, _)| key == "limit").map(|(_, value)| value);
		Self { limit }
	}

	/// Missing `limit` falls back to the default. Values out of the i64 range
	/// saturate; anything else that is not an integer counts as 0.
	pub fn limit(&self, default_limit: i64) -> i64 {
		let Some(raw) = self.limit.as_deref() else {
			return default_limit;
		};

		match raw.parse::<i64>() {
			Ok(limit) => limit,
			Err(err) => match err.kind() {
				IntErrorKind::PosOverflow => i64::MAX,
				IntErrorKind::NegOverflow => i64::MIN,
				_ => 0,
			},
		}
	}
}

#[derive(Debug, Error)]
pub enum HandlerError {
	#[error(transparent)]
	FetchAndAggregateMedia {
		#[from]
		source: FetchAndAggregateMediaError,
	},
}

#[derive(Serialize)]
struct ErrorBody {
	error: bool,
	message: String,
}

// Failures are reported in the body; the status stays 200.
impl IntoResponse for HandlerError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error: true, message: self.to_string() };
		(StatusCode::OK, Json(body)).into_response()
	}
}

/// Axum handler: GET /json?limit=N
pub async fn handler(
	State(state): State<AppState>,
	Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Entry>>, HandlerError> {
	let limit = MediaReadJsonQuery::from_pairs(pairs).limit(state.config.default_limit);
	let client = Client::with_base_url(&state.config.access_token, &state.config.base_url);

	let media = fetch_and_aggregate_media(&client, limit)
		.await
		.inspect_err(|err| error!(error = %err, "media aggregation failed"))?;

	Ok(Json(media))
}

#[derive(Debug, Error)]
pub enum FetchAndAggregateMediaError {
	#[error("{source}")]
	FetchMedia {
		/// Zero-based index of the page that failed.
		page: usize,
		source: FetchMediaError,
	},
}

/// Collects media pages until `limit` entries are gathered or the upstream has
/// no further page.
///
/// The absence of `next` ends the loop regardless of how many entries were
/// collected, and a short page never does. Any failed page discards the whole
/// result.
pub async fn fetch_and_aggregate_media(
	client: &Client,
	limit: i64,
) -> Result<Vec<Entry>, FetchAndAggregateMediaError> {
	let mut media = Vec::new();
	let mut next: Option<String> = None;
	let mut counter: i64 = 0;
	let mut page = 0;

	while counter < limit {
		let MediaResponse { data, paging } = client
			.get_media(limit, next.as_deref())
			.await
			.map_err(|source| FetchAndAggregateMediaError::FetchMedia { page, source })?;

		let received = data.len();
		media.extend(data);

		match paging.next_page() {
			None => counter = limit,
			Some(url) => {
				counter = counter.saturating_add(i64::try_from(received).unwrap_or(i64::MAX));
				next = Some(url.to_owned());
			}
		}

		info!(page, received, counter, "Received media page");
		page += 1;
	}

	Ok(media)
}
