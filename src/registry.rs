//! Immutable collection of validated scopes.
//!
//! A [`Registry`] is built once from raw definitions and then only read.
//! Construction is all-or-nothing: the first definition that fails
//! validation aborts the build and no registry exists, not even for the
//! definitions that were valid.

use tracing::debug;

use crate::error::Result;
use crate::scope::{ScopeDef, ValidScope};

/// Validated scopes in input order, looked up by name.
///
/// The registry owns its [`ValidScope`] values exclusively and exposes no
/// mutation operation, so a single instance can be shared across threads
/// and used by [`Registry::encode`] and [`Registry::decode`] concurrently
/// without coordination.
///
/// # Examples
///
/// ```
/// use tagbits::{Registry, ScopeDef, hash::fingerprint};
///
/// let tags = vec!["read".to_string(), "write".to_string()];
/// let registry = Registry::build([ScopeDef {
///     name: "acl".into(),
///     checksum: fingerprint(&tags),
///     tags,
/// }])?;
///
/// assert_eq!(registry.lookup("acl").unwrap().len(), 2);
/// assert!(registry.lookup("missing").is_none());
/// # Ok::<(), tagbits::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Registry {
    scopes: Vec<ValidScope>,
}

impl Registry {
    /// Validate `defs` in input order and build the registry.
    ///
    /// Returns the first validation error and no registry if any
    /// definition is rejected.
    pub fn build(defs: impl IntoIterator<Item = ScopeDef>) -> Result<Self> {
        let scopes = defs
            .into_iter()
            .map(ScopeDef::validate)
            .collect::<Result<Vec<_>>>()?;
        debug!(scopes = scopes.len(), "registry built");
        Ok(Registry { scopes })
    }

    /// The first held scope whose name equals `name`.
    pub fn lookup(&self, name: &str) -> Option<&ValidScope> {
        self.scopes.iter().find(|scope| scope.name() == name)
    }

    /// All held scopes, in build order.
    pub fn scopes(&self) -> &[ValidScope] {
        &self.scopes
    }

    /// Number of held scopes.
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// True when the registry holds no scopes.
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}
