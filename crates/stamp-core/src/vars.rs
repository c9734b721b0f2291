//! Ordered variable map built from `KEY=VALUE` assignments.
//!
//! Substitution order is observable (see [`crate::render`]), so the map
//! preserves insertion order: a duplicate key overwrites the earlier value
//! *in place*, keeping the position of the first occurrence. This matches
//! insertion-ordered map semantics — last value wins, first position kept.

use tracing::debug;

use crate::error::{StampError, StampResult};

/// An ordered mapping from placeholder names to replacement values.
///
/// Keys are unique. The map is small (one entry per `--var` flag), so a
/// plain `Vec` with linear lookup beats a hash map here — and it keeps the
/// ordering guarantee for free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VarMap {
    entries: Vec<(String, String)>,
}

impl VarMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from raw `KEY=VALUE` strings, in the order supplied.
    ///
    /// Fails on the first argument with no `=` separator; nothing is
    /// retained from a failed build.
    pub fn from_assignments<I, S>(assignments: I) -> StampResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for raw in assignments {
            let (key, value) = parse_assignment(raw.as_ref())?;
            map.insert(key, value);
        }
        debug!(count = map.len(), "variable map built");
        Ok(map)
    }

    /// Insert a pair. A duplicate key keeps its original position and takes
    /// the new value (last write wins).
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Get a value if the key exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no variables were supplied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split a raw `KEY=VALUE` argument on the *first* `=`.
///
/// The value may itself contain `=`. Empty keys and empty values are
/// accepted — the substitution is literal, so `=v` simply targets the
/// placeholder `{{}}`.
pub fn parse_assignment(raw: &str) -> StampResult<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(StampError::InvalidAssignment { arg: raw.into() }),
    }
}
