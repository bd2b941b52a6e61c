//! Error taxonomy shared across the signing, exchange, and search stages.
//!
//! Every variant is fatal: the flow is strictly fail-fast and surfaces the first error it
//! encounters without retrying. The four top-level variants map one-to-one onto the stage
//! that produced them, so callers can tell a local configuration problem apart from an
//! upstream rejection without string matching.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem; no network call was attempted.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Token endpoint rejected the assertion or was unreachable.
	#[error(transparent)]
	AuthExchange(#[from] ExchangeError),
	/// Token endpoint answered successfully but without the fields the flow requires.
	#[error(transparent)]
	UpstreamContract(#[from] ContractError),
	/// Search endpoint rejected the request or was unreachable.
	#[error(transparent)]
	ApiCall(#[from] SearchError),
}

/// Configuration and validation failures raised before any network call.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// A semantically required configuration value is absent.
	#[error("Required configuration value `{name}` is missing.")]
	MissingValue {
		/// Environment variable or field name.
		name: &'static str,
	},
	/// The private key material is not valid base64.
	#[error("Private key material is not valid base64.")]
	KeyEncoding(#[from] base64::DecodeError),
	/// The decoded private key is not usable for RS256 signing.
	#[error("Private key is not a usable RS256 signing key.")]
	Key(#[from] jsonwebtoken::errors::Error),
	/// A configured URL cannot be parsed.
	#[error("Configured URL `{value}` is invalid.")]
	InvalidUrl {
		/// The rejected configuration value.
		value: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Token-endpoint failures (rejection or transport).
#[derive(Debug, ThisError)]
pub enum ExchangeError {
	/// Token endpoint answered with a non-success status.
	#[error("Token endpoint rejected the assertion with HTTP {status}: {body}.")]
	Rejected {
		/// Upstream HTTP status code.
		status: u16,
		/// Upstream response body, when available.
		body: String,
	},
	/// Network failure (DNS, TCP, TLS, proxy, timeout) while calling the token endpoint.
	#[error("Network error occurred while calling the token endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl ExchangeError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}

/// Token endpoint responses that violate the expected shape.
#[derive(Debug, ThisError)]
pub enum ContractError {
	/// A required field is absent from the token response.
	#[error("Token endpoint response is missing `{field}`.")]
	MissingField {
		/// Name of the absent field.
		field: &'static str,
	},
	/// Token endpoint responded with malformed JSON that could not be parsed.
	#[error("Token endpoint returned malformed JSON.")]
	Malformed {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Search-endpoint failures (rejection, transport, or malformed body).
#[derive(Debug, ThisError)]
pub enum SearchError {
	/// Search endpoint answered with a non-success status.
	#[error("Search endpoint rejected the request with HTTP {status}: {body}.")]
	Rejected {
		/// Upstream HTTP status code.
		status: u16,
		/// Upstream response body, when available.
		body: String,
	},
	/// Network failure (DNS, TCP, TLS, proxy, timeout) while calling the search endpoint.
	#[error("Network error occurred while calling the search endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Search endpoint responded with malformed JSON that could not be parsed.
	#[error("Search endpoint returned malformed JSON.")]
	Malformed {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}
impl SearchError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
