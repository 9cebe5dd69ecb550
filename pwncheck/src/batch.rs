use std::collections::HashMap;

use crate::client::RangeClient;
use crate::error::Error;
use crate::lookup::{check_digest, check_password};
use crate::rate::Throttle;

/// Checks many passwords and maps each to its breach count.
///
/// Items are processed strictly in the order supplied, one throttled
/// range request at a time with no concurrent requests in flight;
/// `throttle.ready()` gates every request so the remote budget is
/// respected (the public service allows roughly 8 requests per
/// second). The first failing lookup aborts the batch and returns its
/// error; counts already computed are discarded rather than returned
/// as a partial result. Deduplicating the input is the caller's
/// responsibility: duplicates are each looked up independently and the
/// later result overwrites the earlier map entry.
pub async fn check_passwords<C: RangeClient>(
    passwords: &[&str],
    client: &C,
    throttle: &Throttle,
) -> Result<HashMap<String, u64>, Error> {
    let mut counts = HashMap::with_capacity(passwords.len());
    for password in passwords {
        throttle.ready().await;
        let count = check_password(password, client).await?;
        counts.insert((*password).to_string(), count);
    }
    Ok(counts)
}

/// [`check_passwords`] over precomputed digests, keyed by digest.
///
/// Same ordering, throttling, and first-error-aborts semantics; lets
/// the caller keep the passwords themselves out of this crate.
pub async fn check_digests<C: RangeClient>(
    digests: &[&str],
    client: &C,
    throttle: &Throttle,
) -> Result<HashMap<String, u64>, Error> {
    let mut counts = HashMap::with_capacity(digests.len());
    for digest in digests {
        throttle.ready().await;
        let count = check_digest(digest, client).await?;
        counts.insert((*digest).to_string(), count);
    }
    Ok(counts)
}
