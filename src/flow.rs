//! Orchestration of one invocation: sign, exchange, search, strictly in that order.
//!
//! The flow is fail-fast: the first error aborts every later stage, and nothing is retried
//! or resumed from a partial state. One HTTP client is built up front and reused for both
//! network calls.

// self
use crate::{
	_prelude::*,
	assertion,
	config::IdentityConfig,
	http,
	obs::{FlowStage, StageSpan},
	search::{self, SearchRecords},
	token,
};

/// Runs the whole flow for `config` and `query`, returning the search records.
///
/// A configuration problem (bad key material, unusable proxy URL) fails before any network
/// call; after that, each network boundary maps its failures to the matching [`Error`]
/// variant.
pub async fn run(config: &IdentityConfig, query: &str) -> Result<SearchRecords> {
	let client = http::build_client(config)?;
	let signed = {
		let _guard = StageSpan::new(FlowStage::Sign).entered();

		assertion::sign(config)?
	};
	let grant = StageSpan::new(FlowStage::Exchange)
		.instrument(token::exchange(&signed, &client, config))
		.await?;

	StageSpan::new(FlowStage::Search)
		.instrument(search::search(&grant, query, &client, config))
		.await
}
