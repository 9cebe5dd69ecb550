//! k-anonymity breached-password checking against a Pwned Passwords
//! style range API.
//!
//! A password is never sent anywhere. It is hashed locally with SHA-1,
//! only the first 5 hex characters of the digest are disclosed, and the
//! remote service answers with every `SUFFIX:COUNT` entry sharing that
//! prefix. The remaining 35 characters are matched locally, so the
//! service learns nothing beyond the prefix.
//!
//! This crate is the engine only: digest handling, response parsing,
//! single lookups, and rate-limited batch orchestration. The network
//! sits behind the [`RangeClient`] trait; a reqwest implementation
//! lives in the `pwncheck-api` crate, and tests substitute in-memory
//! stubs.
//!
//! # Usage
//!
//! ```ignore
//! let client = pwncheck_api::PwnedPasswords::new()?;
//! let count = pwncheck::check_password("hunter2", &client).await?;
//! if count > 0 {
//!     println!("pwned {count} times");
//! }
//! ```
//!
//! Batch checks share one request budget through a [`Throttle`]:
//!
//! ```ignore
//! let throttle = Throttle::default();
//! let counts = pwncheck::check_passwords(&["a", "b"], &client, &throttle).await?;
//! ```

pub mod batch;
pub mod client;
pub mod digest;
pub mod error;
pub mod lookup;
pub mod range;
pub mod rate;

pub use batch::{check_digests, check_passwords};
pub use client::RangeClient;
pub use digest::{DIGEST_LEN, PREFIX_LEN, sha1_hex, split};
pub use error::Error;
pub use lookup::{check_digest, check_password};
pub use range::{RangeMap, parse_range_body};
pub use rate::{DEFAULT_REQUESTS_PER_SECOND, Throttle};
