//! Listing invariant violations.

/// A [`ListBucketResult`](crate::ListBucketResult) whose fields disagree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// `MaxKeys` is negative.
    #[error("MaxKeys must not be negative, got {0}")]
    NegativeMaxKeys(i64),

    /// `KeyCount` differs from the number of `Contents` entries.
    #[error("KeyCount is {key_count} but the listing holds {entries} entries")]
    KeyCountMismatch {
        /// Declared key count.
        key_count: i64,
        /// Entries actually present.
        entries: usize,
    },

    /// More entries than `MaxKeys` allows.
    #[error("KeyCount {key_count} exceeds MaxKeys {max_keys}")]
    KeyCountExceedsMaxKeys {
        /// Declared key count.
        key_count: i64,
        /// Page size bound.
        max_keys: i64,
    },

    /// `IsTruncated` is true but no continuation token is set.
    #[error("IsTruncated is true but NextContinuationToken is missing")]
    TruncatedWithoutToken,

    /// A continuation token is set on a listing that is not truncated.
    #[error("NextContinuationToken is set but IsTruncated is false")]
    TokenWithoutTruncation,
}
