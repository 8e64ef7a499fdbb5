//! Credentials and request signing for the CoinsPaid API v2
//!
//! Every private request carries two headers: the public key and an
//! HMAC-SHA512 signature of the exact JSON body, hex encoded.
//!
//! # Example
//!
//! ```
//! use coinspaid_auth::{Credentials, RequestSigner};
//! use coinspaid_types::Params;
//!
//! let creds = Credentials::new("PUBLIC", "SECRET").unwrap();
//! let params = Params::new().with("currency", "BTC");
//!
//! let signed = RequestSigner::new(&creds).sign(&params).unwrap();
//! assert_eq!(signed.body, r#"{"currency":"BTC"}"#);
//! assert_eq!(signed.signature.len(), 128);
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
pub use signer::{RequestSigner, SignedPayload, KEY_HEADER, SIGNATURE_HEADER};
