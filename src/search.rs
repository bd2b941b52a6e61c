//! Authenticated SOSL search against the instance's REST API.
//!
//! The query string is supplied by the caller and treated as opaque; this module only
//! URL-encodes it into the request. An absent `searchRecords` field and an empty array are
//! deliberately treated the same: the upstream legitimately reports zero matches either way.

// crates.io
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
// self
use crate::{_prelude::*, config::IdentityConfig, error::SearchError, token::AccessTokenGrant};

/// Ordered sequence of opaque records returned by the search endpoint.
pub type SearchRecords = Vec<serde_json::Value>;

#[derive(Debug, Deserialize)]
struct SearchResponse {
	#[serde(default, rename = "searchRecords")]
	search_records: SearchRecords,
}

/// Runs `query` against `{instance_url}/services/data/{api_version}/search/` using the
/// grant's bearer credential.
pub async fn search(
	grant: &AccessTokenGrant,
	query: &str,
	client: &ReqwestClient,
	config: &IdentityConfig,
) -> Result<SearchRecords> {
	let endpoint =
		format!("{}/services/data/{}/search/", grant.instance_url, config.api_version);
	let response = client
		.get(&endpoint)
		.query(&[("q", query)])
		.header(AUTHORIZATION, format!("Bearer {}", grant.access_token.expose()))
		.header(CONTENT_TYPE, "application/json")
		.send()
		.await
		.map_err(SearchError::network)?;
	let status = response.status();
	let body = response.bytes().await.map_err(SearchError::network)?;

	if !status.is_success() {
		return Err(SearchError::Rejected {
			status: status.as_u16(),
			body: String::from_utf8_lossy(&body).into_owned(),
		}
		.into());
	}

	let deserializer = &mut serde_json::Deserializer::from_slice(&body);
	let parsed: SearchResponse = serde_path_to_error::deserialize(deserializer)
		.map_err(|e| SearchError::Malformed { source: e })?;

	Ok(parsed.search_records)
}
