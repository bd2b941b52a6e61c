//! Token exchange: trades a signed assertion for a short-lived access token.
//!
//! One POST to the authorization server's token endpoint per invocation. A rejection is
//! final; retrying would need a fresh assertion and only makes sense after the underlying
//! cause is addressed, so no retry is attempted here.

// self
use crate::{
	_prelude::*,
	assertion::SignedAssertion,
	config::{self, IdentityConfig, Secret},
	error::{ContractError, ExchangeError},
};

/// Successful token-endpoint response: the bearer credential plus the API base URL that
/// subsequent calls must target. Consumed immediately; never cached.
#[derive(Clone, Debug)]
pub struct AccessTokenGrant {
	/// Opaque bearer credential.
	pub access_token: Secret,
	/// Base URL of the org instance serving the REST API.
	pub instance_url: String,
}

#[derive(Debug, Deserialize)]
struct TokenEndpointResponse {
	access_token: Option<String>,
	instance_url: Option<String>,
}

/// Exchanges `assertion` for an [`AccessTokenGrant`] at `{auth_url}/services/oauth2/token`.
///
/// Both `access_token` and `instance_url` are required in the response; a missing field
/// means the provider did not honor the expected contract and the flow fails.
pub async fn exchange(
	assertion: &SignedAssertion,
	client: &ReqwestClient,
	config: &IdentityConfig,
) -> Result<AccessTokenGrant> {
	let endpoint = format!("{}{}", config.auth_url, config::TOKEN_PATH);
	let response = client
		.post(&endpoint)
		.query(&[
			("grant_type", config::JWT_BEARER_GRANT_TYPE),
			("assertion", assertion.as_str()),
		])
		.send()
		.await
		.map_err(ExchangeError::network)?;
	let status = response.status();
	let body = response.bytes().await.map_err(ExchangeError::network)?;

	if !status.is_success() {
		return Err(ExchangeError::Rejected {
			status: status.as_u16(),
			body: String::from_utf8_lossy(&body).into_owned(),
		}
		.into());
	}

	let deserializer = &mut serde_json::Deserializer::from_slice(&body);
	let parsed: TokenEndpointResponse = serde_path_to_error::deserialize(deserializer)
		.map_err(|e| ContractError::Malformed { source: e })?;
	let access_token = parsed
		.access_token
		.ok_or(ContractError::MissingField { field: "access_token" })?;
	let instance_url = parsed
		.instance_url
		.ok_or(ContractError::MissingField { field: "instance_url" })?;

	Ok(AccessTokenGrant { access_token: Secret::new(access_token), instance_url })
}
