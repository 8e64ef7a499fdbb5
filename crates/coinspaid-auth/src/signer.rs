//! Request signer
//!
//! Turns ordered parameters into the canonical body plus the headers that
//! authenticate it. The signature is computed over the returned body, so the
//! bytes signed are always the bytes sent.

use coinspaid_types::Params;
use tracing::trace;

use crate::credentials::Credentials;
use crate::error::AuthResult;

/// Header carrying the public key
pub const KEY_HEADER: &str = "X-Processing-Key";
/// Header carrying the hex HMAC-SHA512 signature
pub const SIGNATURE_HEADER: &str = "X-Processing-Signature";

/// Canonical body and its signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    /// JSON body, exactly as signed
    pub body: String,
    /// Lowercase hex HMAC-SHA512 of `body`
    pub signature: String,
}

/// Request signer for building authenticated requests
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer
    pub fn new(credentials: &'a Credentials) -> Self {
        Self { credentials }
    }

    /// Get the public key
    pub fn public_key(&self) -> &str {
        self.credentials.public_key()
    }

    /// Render and sign the parameters
    pub fn sign(&self, params: &Params) -> AuthResult<SignedPayload> {
        let body = params.to_canonical_json()?;
        let signature = self.credentials.sign(&body);
        trace!(len = body.len(), "signed payload");
        Ok(SignedPayload { body, signature })
    }

    /// Authentication headers for a signed payload
    pub fn auth_headers(&self, payload: &SignedPayload) -> [(&'static str, String); 2] {
        [
            (KEY_HEADER, self.public_key().to_string()),
            (SIGNATURE_HEADER, payload.signature.clone()),
        ]
    }
}
