use sha1::{Digest, Sha1};

use crate::error::Error;

/// Length of a full SHA-1 digest in hex characters.
pub const DIGEST_LEN: usize = 40;

/// Length of the disclosed hash prefix (5 hex characters).
pub const PREFIX_LEN: usize = 5;

/// Hashes a secret with SHA-1 and renders it as 40 uppercase hex
/// characters.
///
/// SHA-1 is what the range protocol speaks; it is used for protocol
/// compatibility, not for cryptographic strength.
pub fn sha1_hex(secret: &[u8]) -> String {
    format!("{:X}", Sha1::digest(secret))
}

/// Splits a digest into its disclosed 5-character prefix and withheld
/// 35-character suffix.
///
/// Fails on anything that is not exactly 40 uppercase hex characters.
/// The error carries only the offending length or position, never
/// digest content, and no network request is made for a rejected
/// digest.
pub fn split(digest: &str) -> Result<(&str, &str), Error> {
    if digest.len() != DIGEST_LEN {
        return Err(Error::DigestLength { actual: digest.len() });
    }
    let uppercase_hex = |b: u8| matches!(b, b'0'..=b'9' | b'A'..=b'F');
    if let Some(position) = digest.bytes().position(|b| !uppercase_hex(b)) {
        return Err(Error::DigestNotHex { position });
    }
    Ok(digest.split_at(PREFIX_LEN))
}
