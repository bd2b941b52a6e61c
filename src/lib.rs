//! Salesforce JWT-bearer authentication and SOSL search client—sign an assertion, exchange it
//! for an access token, and run one authenticated search per invocation.
//!
//! Each invocation is self-contained: a fresh assertion is signed, exchanged once, and the
//! resulting bearer token is used for exactly one search call. Nothing is cached or reused
//! across invocations.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod assertion;
pub mod config;
pub mod error;
pub mod flow;
pub mod http;
pub mod obs;
pub mod search;
pub mod token;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// crates.io
	use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
	// self
	use crate::config::IdentityConfig;

	/// PKCS#1 RSA private key used to sign assertions in tests.
	pub const TEST_RSA_PRIVATE_PEM: &str = include_str!("../tests/fixtures/rsa_private.pem");
	/// Public half of [`TEST_RSA_PRIVATE_PEM`], for decoding signed assertions in tests.
	pub const TEST_RSA_PUBLIC_PEM: &str = include_str!("../tests/fixtures/rsa_public.pem");

	/// Builds an [`IdentityConfig`] pointed at a mock authorization server, signed with the
	/// test RSA key.
	pub fn test_identity_config(auth_url: &str) -> IdentityConfig {
		IdentityConfig::new(
			BASE64.encode(TEST_RSA_PRIVATE_PEM),
			"test-client-id",
			"integration@example.com",
		)
		.with_auth_url(auth_url)
		.with_audience("https://login.test.invalid")
	}
}

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
	};

	pub use reqwest::Client as ReqwestClient;
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use url;
// Binary-only dependencies; the library itself never touches the environment or a runtime.
use {dotenvy as _, tokio as _};
#[cfg(test)] use httpmock as _;
