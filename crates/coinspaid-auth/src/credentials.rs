//! API credentials for CoinsPaid
//!
//! Implements HMAC-SHA512 signing as required by every private endpoint.
//!
//! # Security
//!
//! The secret key is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox};
use sha2::Sha512;

use crate::error::{AuthError, AuthResult};

type HmacSha512 = Hmac<Sha512>;

/// Environment variable holding the public key
pub(crate) const PUBLIC_KEY_VAR: &str = "COINSPAID_PUBLIC_KEY";
/// Environment variable holding the secret key
pub(crate) const SECRET_KEY_VAR: &str = "COINSPAID_SECRET_KEY";

/// API credentials for authenticated requests
///
/// The secret key is zeroized when the credentials are dropped.
pub struct Credentials {
    /// Public key, sent in clear with every request
    public_key: String,
    /// Secret key bytes, used only as the HMAC key
    secret_key: SecretBox<Vec<u8>>,
}

impl Credentials {
    /// Create credentials from a public key and secret key
    ///
    /// The secret is used as its ASCII bytes; a secret containing non-ASCII
    /// characters is rejected rather than silently re-encoded.
    pub fn new(public_key: impl Into<String>, secret_key: impl AsRef<str>) -> AuthResult<Self> {
        let public_key = public_key.into();
        let secret_key = secret_key.as_ref();

        if public_key.is_empty() {
            return Err(AuthError::InvalidCredentials(
                "public key is empty".to_string(),
            ));
        }
        if !secret_key.is_ascii() {
            return Err(AuthError::InvalidCredentials(
                "secret key must be ASCII".to_string(),
            ));
        }

        Ok(Self {
            public_key,
            secret_key: SecretBox::new(Box::new(secret_key.as_bytes().to_vec())),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `COINSPAID_PUBLIC_KEY` and `COINSPAID_SECRET_KEY`.
    pub fn from_env() -> AuthResult<Self> {
        let public_key = std::env::var(PUBLIC_KEY_VAR)
            .map_err(|_| AuthError::EnvVarNotSet(PUBLIC_KEY_VAR.to_string()))?;
        let secret_key = std::env::var(SECRET_KEY_VAR)
            .map_err(|_| AuthError::EnvVarNotSet(SECRET_KEY_VAR.to_string()))?;

        Self::new(public_key, secret_key)
    }

    /// Get the public key
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Sign a payload
    ///
    /// HMAC-SHA512 keyed with the secret over the UTF-8 bytes of `payload`,
    /// rendered as lowercase hex without separators.
    pub fn sign(&self, payload: &str) -> String {
        let mut mac = HmacSha512::new_from_slice(self.secret_key.expose_secret())
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretBox with same content)
    fn clone(&self) -> Self {
        Self {
            public_key: self.public_key.clone(),
            secret_key: SecretBox::new(Box::new(self.secret_key.expose_secret().clone())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "public_key",
                &format!("{}...", self.public_key.chars().take(8).collect::<String>()),
            )
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
