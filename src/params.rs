use std::any::{Any, type_name};
use std::collections::{HashMap, HashSet};

use crate::error::NavigationError;

/// A single navigation parameter: key plus type-erased value.
pub type Param = (String, Box<dyn Any + Send + Sync>);

/// Build a [`Param`] without spelling out the boxing.
pub fn param(key: impl Into<String>, value: impl Any + Send + Sync) -> Param {
    (key.into(), Box::new(value))
}

/// Transient key/value store scoped to the most recent navigation.
///
/// The bag is fully replaced (cleared, then repopulated) at the start of every
/// navigation that pushes or inserts a page, before any destination page is
/// constructed. Entries are never merged across navigations, so a page only
/// ever sees the parameters of the navigation that created it.
#[derive(Default)]
pub struct NavigationParams {
    entries: HashMap<String, Box<dyn Any + Send + Sync>>,
}

/// Fails when the same key appears twice in one parameter list.
pub(crate) fn ensure_unique_keys(entries: &[Param]) -> Result<(), NavigationError> {
    let mut seen = HashSet::new();
    for (key, _) in entries {
        if !seen.insert(key.as_str()) {
            return Err(NavigationError::DuplicateParameterKey { key: key.clone() });
        }
    }
    Ok(())
}

impl NavigationParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every prior entry, then insert `entries`.
    ///
    /// Duplicate keys within one call are a caller error and are rejected
    /// before anything is cleared.
    pub(crate) fn replace(&mut self, entries: Vec<Param>) -> Result<(), NavigationError> {
        ensure_unique_keys(&entries)?;
        self.entries.clear();
        self.entries.extend(entries);
        Ok(())
    }

    /// Borrow the value stored under `key` as a `T`.
    pub fn get<T: Any>(&self, key: &str) -> Result<&T, NavigationError> {
        match self.entries.get(key) {
            Some(value) => value
                .downcast_ref::<T>()
                .ok_or_else(|| NavigationError::InvalidCast {
                    key: key.to_string(),
                    expected: type_name::<T>(),
                }),
            None => Err(NavigationError::KeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// Like [`get`](Self::get), but a missing key is `Ok(None)` rather than an
    /// error. A present value of the wrong type still fails.
    pub fn try_get<T: Any>(&self, key: &str) -> Result<Option<&T>, NavigationError> {
        match self.entries.get(key) {
            Some(value) => value
                .downcast_ref::<T>()
                .map(Some)
                .ok_or_else(|| NavigationError::InvalidCast {
                    key: key.to_string(),
                    expected: type_name::<T>(),
                }),
            None => Ok(None),
        }
    }

    /// Whether a value is stored under `key`. An empty key is rejected.
    pub fn contains_key(&self, key: &str) -> Result<bool, NavigationError> {
        if key.is_empty() {
            return Err(NavigationError::EmptyKey);
        }
        Ok(self.entries.contains_key(key))
    }
}
