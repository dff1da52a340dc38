//! Bit-vector codec: packing tag selections into delimiter-safe fragments.
//!
//! A selection of tags from one scope becomes a packed byte array (bit `i`
//! set means the tag at canonical index `i` is selected), rendered in the
//! base58 alphabet and wrapped as `name[payload]`. Fragments concatenate
//! with no separator, so a full encoded string is `name[payload]` repeated.
//!
//! Encode and decode are deliberately asymmetric: encode preserves the
//! caller's scope order and is insensitive to the order tags are listed in
//! a selection, while decode always yields tags in ascending canonical
//! index order and scopes in fragment order.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result};
use crate::registry::Registry;

/// A named scope together with a set of selected tags.
///
/// Used both as encode input and decode output. On input the tag order is
/// not semantically meaningful; on decode output tags always appear in
/// ascending canonical-index order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopedTags {
    /// Scope name, resolved against the registry.
    pub name: String,
    /// Selected tags.
    pub tags: Vec<String>,
}

impl ScopedTags {
    /// Convenience constructor.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagbits::ScopedTags;
    ///
    /// let sel = ScopedTags::new("acl", ["read", "write"]);
    /// assert_eq!(sel.name, "acl");
    /// assert_eq!(sel.tags, ["read", "write"]);
    /// ```
    pub fn new<N, I, T>(name: N, tags: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        ScopedTags {
            name: name.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }
}

impl Registry {
    /// Encode tag selections into one packed string.
    ///
    /// Each selection resolves against its scope's vocabulary; an unknown
    /// scope or tag aborts the whole call with no partial output. A
    /// selection with zero tags contributes nothing, not an empty
    /// fragment. Identical tag sets always render identical fragments,
    /// whatever order the tags were listed in; the order of scopes across
    /// fragments is exactly the caller's selection order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagbits::{Registry, ScopeDef, ScopedTags, hash::fingerprint};
    ///
    /// let tags = vec!["c".to_string(), "a".to_string(), "b".to_string()];
    /// let registry = Registry::build([ScopeDef {
    ///     name: "xtest".into(),
    ///     checksum: fingerprint(&tags),
    ///     tags,
    /// }])?;
    ///
    /// let encoded = registry.encode(&[ScopedTags::new("xtest", ["a", "b"])])?;
    /// assert_eq!(encoded, "xtest[7]");
    ///
    /// let decoded = registry.decode(&encoded)?;
    /// assert_eq!(decoded, vec![ScopedTags::new("xtest", ["a", "b"])]);
    /// # Ok::<(), tagbits::Error>(())
    /// ```
    pub fn encode(&self, selections: &[ScopedTags]) -> Result<String> {
        let mut out = String::new();
        for selection in selections {
            let scope = self
                .lookup(&selection.name)
                .ok_or_else(|| Error::ScopeNotFound(selection.name.clone()))?;

            let mut indices = Vec::with_capacity(selection.tags.len());
            let mut max_index = None;
            for tag in &selection.tags {
                let index = scope.index_of(tag).ok_or_else(|| Error::TagNotFound {
                    scope: selection.name.clone(),
                    tag: tag.clone(),
                })?;
                indices.push(index);
                max_index = Some(max_index.map_or(index, |max: usize| max.max(index)));
            }

            // A selection without tags is omitted entirely.
            let Some(max_index) = max_index else {
                continue;
            };

            let mut bits = vec![0u8; max_index / 8 + 1];
            for index in indices {
                bits[index / 8] |= 1 << (index % 8);
            }

            out.push_str(scope.name());
            out.push('[');
            out.push_str(&bs58::encode(&bits).into_string());
            out.push(']');
        }
        trace!(
            selections = selections.len(),
            encoded_len = out.len(),
            "encoded selections"
        );
        Ok(out)
    }

    /// Decode a packed string back into per-scope tag selections.
    ///
    /// Splits on `]`, trims each piece and drops empty ones, then splits
    /// each remaining piece on its single `[` into name and payload. The
    /// payload is base58-decoded and its bits scanned from byte 0 upward,
    /// least-significant bit first; every set bit at absolute index `i`
    /// selects the tag at canonical index `i`. A set bit beyond the
    /// scope's vocabulary fails with [`Error::IndexOutOfRange`] rather
    /// than dropping the tag: the encoded string was produced against a
    /// different vocabulary and nothing it decodes to can be trusted.
    pub fn decode(&self, encoded: &str) -> Result<Vec<ScopedTags>> {
        let mut out = Vec::new();
        for piece in encoded.split(']') {
            let piece = piece.trim();
            if piece.is_empty() {
                continue;
            }

            let (name, payload) = piece.split_once('[').ok_or_else(|| {
                Error::MalformedEncoding(format!("fragment {piece:?} is missing '['"))
            })?;
            if payload.contains('[') {
                return Err(Error::MalformedEncoding(format!(
                    "fragment {piece:?} contains more than one '['"
                )));
            }

            let bits = bs58::decode(payload).into_vec().map_err(|err| {
                Error::MalformedEncoding(format!("payload of scope {name:?}: {err}"))
            })?;

            let scope = self
                .lookup(name)
                .ok_or_else(|| Error::ScopeNotFound(name.to_string()))?;

            let mut tags = Vec::new();
            for (byte_index, byte) in bits.iter().enumerate() {
                for bit in 0..8 {
                    if byte & (1 << bit) != 0 {
                        let index = byte_index * 8 + bit;
                        let tag =
                            scope
                                .tags()
                                .get(index)
                                .ok_or_else(|| Error::IndexOutOfRange {
                                    scope: name.to_string(),
                                    index,
                                    tag_count: scope.len(),
                                })?;
                        tags.push(tag.clone());
                    }
                }
            }

            out.push(ScopedTags {
                name: name.to_string(),
                tags,
            });
        }
        trace!(
            encoded_len = encoded.len(),
            scopes = out.len(),
            "decoded selections"
        );
        Ok(out)
    }
}
