//! Errors for configured predicates.

use thiserror::Error;

/// Error while loading or assembling a predicate from its configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not a valid predicate description.
    #[error("failed to parse predicate config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A `between` predicate was given a lower bound greater than its upper bound, so it could
    /// never match.
    #[error("between predicate has an empty range: low bound is greater than high bound")]
    EmptyRange,
}
