//! Transport factory: one HTTP client shared by the token exchange and the search call.
//!
//! Proxy behavior is fully explicit: environment-based proxy auto-detection is disabled
//! unconditionally, so the client connects directly unless the configuration names a
//! forward proxy. This keeps outbound routing deterministic from configuration alone.

// crates.io
use reqwest::Proxy;
// self
use crate::{_prelude::*, config::IdentityConfig, error::ConfigError};

/// Request timeout applied to every outbound call.
pub const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Builds the HTTP client used for both network calls of one invocation.
///
/// The client is read-only after construction; build it once per invocation and reuse it
/// for the token exchange and the search call.
pub fn build_client(config: &IdentityConfig) -> Result<ReqwestClient, ConfigError> {
	let mut builder = ReqwestClient::builder().timeout(REQUEST_TIMEOUT).no_proxy();

	if let Some(proxy) = &config.proxy {
		builder = builder
			.proxy(Proxy::all(proxy.clone()).map_err(ConfigError::http_client_build)?);
	}

	builder.build().map_err(ConfigError::http_client_build)
}
