use std::num::ParseIntError;

/// Errors produced by the lookup engine.
///
/// Secrets, digests, and hash suffixes never appear in these messages.
/// Prefixes are already disclosed to the remote service, so carrying
/// them here leaks nothing new.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The range client could not obtain a response for a prefix.
    #[error("range request failed for prefix {prefix}: {source}")]
    Transport {
        prefix: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A range response line could not be split into a suffix and a count.
    #[error("range response line {line} is not in SUFFIX:COUNT form")]
    MalformedLine { line: usize },

    /// A range response line carried a count that is not a base-10 integer.
    #[error("range response line {line} has an invalid count")]
    InvalidCount {
        line: usize,
        #[source]
        source: ParseIntError,
    },

    /// A caller-supplied digest was not 40 characters long.
    #[error("digest must be 40 hex characters, got {actual}")]
    DigestLength { actual: usize },

    /// A caller-supplied digest contained a character outside uppercase hex.
    #[error("digest has a non-uppercase-hex character at position {position}")]
    DigestNotHex { position: usize },
}
