//! Assertion signing: turns the identity configuration into a signed JWT.
//!
//! The assertion is the only artifact the authorization server accepts as proof of
//! identity. It is created fresh for every invocation, carries a fixed one-hour validity
//! window, and must be used at most once, immediately after creation.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
// self
use crate::{_prelude::*, config::IdentityConfig, error::ConfigError};

/// Validity window of a freshly signed assertion.
pub const ASSERTION_VALIDITY: Duration = Duration::hours(1);

/// Opaque, single-use signed JWT.
///
/// The wrapper exists so a raw `String` cannot be passed where a signed assertion is
/// expected. It carries no expiry bookkeeping; the claim inside the token is authoritative.
#[derive(Clone, Debug)]
pub struct SignedAssertion(String);
impl SignedAssertion {
	/// Returns the compact JWT serialization.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for SignedAssertion {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

/// Claim payload of the assertion; nothing beyond the four registered claims.
#[derive(Debug, Serialize, Deserialize)]
pub struct AssertionClaims {
	/// Issuer: the OAuth client identifier.
	pub iss: String,
	/// Audience: the authorization server expected to consume the assertion.
	pub aud: String,
	/// Subject: the username the access token will act as.
	pub sub: String,
	/// Expiration as a Unix timestamp, one hour after issuance.
	pub exp: i64,
}

/// Signs an assertion for `config` using the current wall clock.
///
/// The configured key material is base64-decoded and must contain an RSA private key in
/// PEM form; anything else fails with a [`ConfigError`] before any network call happens.
pub fn sign(config: &IdentityConfig) -> Result<SignedAssertion, ConfigError> {
	sign_at(config, OffsetDateTime::now_utc())
}

/// Signs an assertion issued at `now`; deterministic given a fixed timestamp.
pub fn sign_at(config: &IdentityConfig, now: OffsetDateTime) -> Result<SignedAssertion, ConfigError> {
	if config.key.expose().is_empty() {
		return Err(ConfigError::MissingValue { name: "SALESFORCE_KEY" });
	}

	let pem = BASE64.decode(config.key.expose())?;
	let key = EncodingKey::from_rsa_pem(&pem)?;
	let claims = AssertionClaims {
		iss: config.client_id.clone(),
		aud: config.audience.clone(),
		sub: config.username.clone(),
		exp: (now + ASSERTION_VALIDITY).unix_timestamp(),
	};
	let token = jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &key)?;

	Ok(SignedAssertion(token))
}
