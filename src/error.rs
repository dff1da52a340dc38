//! Error taxonomy for scope validation and the bit-vector codec.
//!
//! Every fallible operation in this crate yields either a success value or
//! exactly one `Error` describing the first failure encountered. There is
//! no partial success: a failed registry build leaves no usable registry,
//! and a failed encode or decode produces no output.

use thiserror::Error;

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// First-failure error for registry construction, encoding and decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The scope name is empty or contains a reserved `[` / `]` delimiter.
    #[error("invalid scope name {0:?}: empty or contains '[' or ']'")]
    InvalidName(String),

    /// The declared checksum does not match the recomputed fingerprint of
    /// the scope's deduplicated tag set.
    #[error("checksum mismatch for scope {scope:?}: computed {computed}, declared {declared}")]
    ChecksumMismatch {
        /// Name of the scope that failed validation.
        scope: String,
        /// Fingerprint recomputed from the tag set.
        computed: String,
        /// Checksum the definition declared.
        declared: String,
    },

    /// No scope with this name is held by the registry.
    #[error("scope not found: {0:?}")]
    ScopeNotFound(String),

    /// A requested tag is not part of the scope's vocabulary.
    #[error("tag {tag:?} not found in scope {scope:?}")]
    TagNotFound {
        /// Scope the tag was looked up in.
        scope: String,
        /// The unknown tag.
        tag: String,
    },

    /// An encoded fragment is structurally broken or its payload contains
    /// characters outside the base58 alphabet.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),

    /// A decoded bit index exceeds the scope's tag count, typically because
    /// the vocabulary changed since the string was encoded.
    #[error("bit index {index} out of range for scope {scope:?} ({tag_count} tags)")]
    IndexOutOfRange {
        /// Scope the fragment was decoded against.
        scope: String,
        /// Absolute bit index of the offending set bit.
        index: usize,
        /// Number of tags in the scope's vocabulary.
        tag_count: usize,
    },
}
