//! Shared fixtures for the integration tests.

#![allow(dead_code)]

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
// self
use sfdc_jwt_search::config::IdentityConfig;

/// PKCS#1 RSA private key used to sign assertions in tests.
pub const TEST_RSA_PRIVATE_PEM: &str = include_str!("../fixtures/rsa_private.pem");
/// Public half of [`TEST_RSA_PRIVATE_PEM`], for decoding signed assertions.
pub const TEST_RSA_PUBLIC_PEM: &str = include_str!("../fixtures/rsa_public.pem");

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
