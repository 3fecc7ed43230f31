use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::declaration::DeclarationRecord;
use crate::error::{AutoloadError, Result};

/// Qualified type name → declaring location, in discovery order.
///
/// Serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeMapping {
    entries: IndexMap<String, String>,
}

impl TypeMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Insert an entry, returning the previous location if the name was known.
    pub fn insert(&mut self, name: impl Into<String>, location: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), location.into())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Names sorted lexicographically.
    #[must_use]
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TypeMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// What reconciling one file contributed to the mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOutcome {
    pub added: usize,
}

impl ReconcileOutcome {
    #[must_use]
    pub const fn changed(&self) -> bool {
        self.added > 0
    }
}

/// Merge one file's declarations into `mapping`.
///
/// Names already mapped to the record's own location are left alone. A name
/// mapped to any other location is a conflict; in that case `mapping` is
/// returned untouched, even if earlier records of the same file were new.
///
/// # Errors
/// Returns [`AutoloadError::Conflict`] for the first record whose name is
/// already mapped to a different location.
pub fn reconcile(
    mapping: &mut TypeMapping,
    records: &[DeclarationRecord],
) -> Result<ReconcileOutcome> {
    let mut pending: IndexMap<&str, &str> = IndexMap::new();

    for record in records {
        let name = record.qualified_name.as_str();
        let location = record.source_location.as_str();
        let known = mapping.get(name).or_else(|| pending.get(name).copied());
        match known {
            None => {
                pending.insert(name, location);
            }
            Some(existing) if existing == location => {}
            Some(existing) => {
                return Err(AutoloadError::Conflict {
                    name: name.to_string(),
                    existing: existing.to_string(),
                    location: location.to_string(),
                });
            }
        }
    }

    let added = pending.len();
    for (name, location) in pending {
        mapping.insert(name, location);
    }
    Ok(ReconcileOutcome { added })
}

#[cfg(test)]
#[path = "mapping_tests.rs"]
mod tests;
