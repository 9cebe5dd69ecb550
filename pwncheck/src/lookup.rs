use crate::client::RangeClient;
use crate::digest::{sha1_hex, split};
use crate::error::Error;

/// Checks one password against the breach corpus and returns how many
/// times it is known to have been breached. `0` means "not found".
///
/// The password never leaves the process: only the first 5 hex
/// characters of its SHA-1 digest are handed to the client.
pub async fn check_password<C: RangeClient>(password: &str, client: &C) -> Result<u64, Error> {
    check_digest(&sha1_hex(password.as_bytes()), client).await
}

/// Checks a precomputed 40-character uppercase hex SHA-1 digest.
///
/// Identical to [`check_password`] except the caller does its own
/// hashing, so the password itself never has to reach this crate.
/// An ill-formed digest fails fast without a network call. A suffix
/// absent from the returned range is the common case and yields `0`;
/// client errors are propagated unchanged, with no retries at this
/// layer.
pub async fn check_digest<C: RangeClient>(digest: &str, client: &C) -> Result<u64, Error> {
    let (prefix, suffix) = split(digest)?;
    let map = client.range(prefix).await?;
    Ok(map.get(suffix).copied().unwrap_or(0))
}
