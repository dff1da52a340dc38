//! Scope definitions and their validated, canonical form.
//!
//! A [`ScopeDef`] is the raw, externally supplied triple of name, checksum
//! and tag list. [`ScopeDef::validate`] deduplicates the tags, checks the
//! declared checksum against the recomputed fingerprint and produces a
//! [`ValidScope`] whose tag order and tag-to-index map are fixed for the
//! lifetime of the value.
//!
//! Canonical order is the first-seen order of the deduplicated input tags.
//! The per-tag digest sort exists only inside the fingerprint, which makes
//! the checksum independent of the order the tags were declared in.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hash::fingerprint;

/// Raw scope definition as supplied by a caller.
///
/// Ephemeral input: validation consumes it and it is never retained. The
/// tag list may contain duplicates and carries no meaningful order beyond
/// which duplicate is seen first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeDef {
    /// Scope name. Must be non-empty and free of `[` and `]`, which are
    /// reserved as fragment delimiters.
    pub name: String,
    /// Declared fingerprint of the tag set, see [`crate::hash::fingerprint`].
    pub checksum: String,
    /// Tag vocabulary, duplicates allowed.
    pub tags: Vec<String>,
}

impl ScopeDef {
    /// Validate this definition into its canonical form.
    ///
    /// Fails with [`Error::InvalidName`] on an empty name or a name
    /// containing a reserved delimiter, and with
    /// [`Error::ChecksumMismatch`] when the declared checksum does not
    /// match the fingerprint recomputed over the deduplicated tags.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagbits::{ScopeDef, hash::fingerprint};
    ///
    /// let tags = vec!["read".to_string(), "write".to_string()];
    /// let scope = ScopeDef {
    ///     name: "acl".into(),
    ///     checksum: fingerprint(&tags),
    ///     tags,
    /// }
    /// .validate()?;
    ///
    /// assert_eq!(scope.tags(), ["read", "write"]);
    /// assert_eq!(scope.index_of("write"), Some(1));
    /// # Ok::<(), tagbits::Error>(())
    /// ```
    pub fn validate(self) -> Result<ValidScope> {
        if self.name.is_empty() || self.name.contains(['[', ']']) {
            return Err(Error::InvalidName(self.name));
        }

        let mut seen = HashSet::new();
        let mut tags = Vec::with_capacity(self.tags.len());
        for tag in self.tags {
            if seen.insert(tag.clone()) {
                tags.push(tag);
            }
        }

        let computed = fingerprint(&tags);
        if computed != self.checksum {
            return Err(Error::ChecksumMismatch {
                scope: self.name,
                computed,
                declared: self.checksum,
            });
        }

        let tag_index = tags
            .iter()
            .enumerate()
            .map(|(index, tag)| (tag.clone(), index))
            .collect();

        Ok(ValidScope {
            name: self.name,
            checksum: self.checksum,
            tags,
            tag_index,
        })
    }
}

impl TryFrom<ScopeDef> for ValidScope {
    type Error = Error;

    fn try_from(def: ScopeDef) -> Result<Self> {
        def.validate()
    }
}

/// A validated scope: deduplicated tags in canonical order plus the
/// inverse tag-to-index map.
///
/// Immutable after construction. `tag_index[tags[i]] == i` holds for every
/// position, so the bit index of a tag and the tag at a bit index always
/// agree between [`crate::Registry::encode`] and [`crate::Registry::decode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidScope {
    name: String,
    checksum: String,
    tags: Vec<String>,
    tag_index: HashMap<String, usize>,
}

impl ValidScope {
    /// Scope name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared (and verified) checksum.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Tags in canonical order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Canonical bit index of `tag`, if it belongs to this scope.
    pub fn index_of(&self, tag: &str) -> Option<usize> {
        self.tag_index.get(tag).copied()
    }

    /// Number of tags in the vocabulary.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// True when the vocabulary holds no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(name: &str, checksum: &str, tags: &[&str]) -> ScopeDef {
        ScopeDef {
            name: name.to_string(),
            checksum: checksum.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_validate_keeps_first_seen_order() {
        let tags = ["c", "a", "b"];
        let scope = def("xtest", &fingerprint(&tags), &tags).validate().unwrap();
        assert_eq!(scope.tags(), ["c", "a", "b"]);
        assert_eq!(scope.index_of("c"), Some(0));
        assert_eq!(scope.index_of("a"), Some(1));
        assert_eq!(scope.index_of("b"), Some(2));
        assert_eq!(scope.index_of("d"), None);
    }

    #[test]
    fn test_validate_deduplicates_tags() {
        let scope = def(
            "xtest",
            "2icyXAVNHz29D1dTVYE59sm5foRZmqqBTY26bZdN3q58",
            &["c", "a", "b", "a", "c"],
        )
        .validate()
        .unwrap();
        assert_eq!(scope.tags(), ["c", "a", "b"]);
        assert_eq!(scope.len(), 3);
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let err = def("", &fingerprint(&["a"]), &["a"]).validate().unwrap_err();
        assert_eq!(err, Error::InvalidName(String::new()));
    }

    #[test]
    fn test_validate_rejects_reserved_delimiters() {
        for name in ["te[st", "te]st", "[", "]", "test[😇", "test]😇"] {
            let err = def(name, &fingerprint(&["a"]), &["a"])
                .validate()
                .unwrap_err();
            assert_eq!(err, Error::InvalidName(name.to_string()), "name {name:?}");
        }
    }

    #[test]
    fn test_validate_accepts_unicode_names() {
        let tags = ["a", "b"];
        let scope = def("test😇", &fingerprint(&tags), &tags).validate().unwrap();
        assert_eq!(scope.name(), "test😇");
    }

    #[test]
    fn test_validate_rejects_checksum_mismatch() {
        let err = def("test", "ab19ec537f09499b26f", &["a", "b"])
            .validate()
            .unwrap_err();
        match err {
            Error::ChecksumMismatch {
                scope,
                computed,
                declared,
            } => {
                assert_eq!(scope, "test");
                assert_eq!(computed, fingerprint(&["a", "b"]));
                assert_eq!(declared, "ab19ec537f09499b26f");
            }
            other => panic!("expected ChecksumMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_detects_single_character_corruption() {
        let tags = ["a", "b"];
        let good = fingerprint(&tags);
        for position in 0..good.len() {
            let mut corrupted: Vec<char> = good.chars().collect();
            corrupted[position] = if corrupted[position] == '1' { '2' } else { '1' };
            let corrupted: String = corrupted.into_iter().collect();
            assert!(
                def("test", &corrupted, &tags).validate().is_err(),
                "corruption at {position} went undetected"
            );
        }
    }

    #[test]
    fn test_validate_accepts_empty_tag_set() {
        let empty: [&str; 0] = [];
        let scope = def("bare", &fingerprint(&empty), &[]).validate().unwrap();
        assert!(scope.is_empty());
        assert_eq!(scope.len(), 0);
    }
}
