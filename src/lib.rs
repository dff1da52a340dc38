//! tagbits - Checksummed tag vocabularies, compactly encoded
//!
//! A producer and a consumer agree, via a checksum, on a named "scope" of
//! string tags and its canonical ordering. Arbitrary subsets of a scope's
//! tags then serialize into short, delimiter-safe text fragments: bit `i`
//! of a packed byte array marks the tag at canonical index `i`, and the
//! bytes render in the base58 alphabet as `name[payload]`.
//!
//! The crate provides:
//! - Deterministic tag hashing and order-independent set fingerprints
//! - Scope validation against a declared checksum
//! - An immutable, shareable registry of validated scopes
//! - The bit-vector encode/decode pair itself
//!
//! # Quick Start
//!
//! ```
//! use tagbits::{Registry, ScopeDef, ScopedTags, hash::fingerprint};
//!
//! let tags = vec!["read".to_string(), "write".to_string(), "admin".to_string()];
//! let registry = Registry::build([ScopeDef {
//!     name: "acl".into(),
//!     checksum: fingerprint(&tags),
//!     tags,
//! }])?;
//!
//! let encoded = registry.encode(&[ScopedTags::new("acl", ["admin", "read"])])?;
//! let decoded = registry.decode(&encoded)?;
//!
//! // Decode yields tags in canonical index order, whatever order they
//! // were selected in.
//! assert_eq!(decoded, vec![ScopedTags::new("acl", ["read", "admin"])]);
//! # Ok::<(), tagbits::Error>(())
//! ```
//!
//! # Concurrency
//!
//! A [`Registry`] is immutable after construction; share one instance
//! freely across threads and call [`Registry::encode`] / [`Registry::decode`]
//! concurrently without coordination.

pub mod codec;
pub mod error;
pub mod hash;
pub mod registry;
pub mod scope;

// Re-export main types for convenience
pub use codec::ScopedTags;
pub use error::{Error, Result};
pub use registry::Registry;
pub use scope::{ScopeDef, ValidScope};
