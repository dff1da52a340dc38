//! Deterministic content hashing for tags and tag sets.
//!
//! Every tag is identified by the SHA-256 digest of its UTF-8 bytes,
//! rendered in the base58 alphabet (shorter than hex, no visually
//! ambiguous characters, safe inside encoded fragments). A whole tag set
//! is identified by an order-independent fingerprint built from the
//! per-tag digests.

use sha2::{Digest, Sha256};

/// Base58 rendering of the SHA-256 digest of `text`.
///
/// Pure and total: the same input always yields the same output.
///
/// # Examples
///
/// ```
/// use tagbits::hash::digest;
///
/// assert_eq!(digest("hello"), "42TEXg1vFAbcJ65y7qdYG9iCPvYfy3NDdVLd75akX2P5");
/// assert_eq!(digest("hello"), digest("hello"));
/// ```
pub fn digest(text: &str) -> String {
    bs58::encode(Sha256::digest(text.as_bytes())).into_string()
}

/// Order-independent fingerprint of a tag set.
///
/// Digests every tag, sorts the digest strings ascending, concatenates
/// them and digests the concatenation. Permutations of the same tags
/// produce the same fingerprint. Operates on exactly the sequence it is
/// given: deduplication, if required, must happen before calling it.
///
/// Vocabulary producers use this to mint the checksum a [`crate::ScopeDef`]
/// declares.
///
/// # Examples
///
/// ```
/// use tagbits::hash::fingerprint;
///
/// assert_eq!(fingerprint(&["a", "b"]), fingerprint(&["b", "a"]));
/// assert_ne!(fingerprint(&["a", "b"]), fingerprint(&["a", "b", "c"]));
/// ```
pub fn fingerprint<S: AsRef<str>>(tags: &[S]) -> String {
    let mut digests: Vec<String> = tags.iter().map(|tag| digest(tag.as_ref())).collect();
    digests.sort_unstable();
    digest(&digests.concat())
}
