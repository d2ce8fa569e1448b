//! Normalized permission sets and their delimited string form.

use std::collections::BTreeSet;
use std::fmt;

/// Separator between permission names in the stored form.
pub const DELIMITER: char = ',';

/// A set of permission names.
///
/// Membership is an exact, case-sensitive lookup. Iteration order is sorted,
/// so [`PermissionSet::encode`] is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet(BTreeSet<String>);

impl PermissionSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a delimited string.
    ///
    /// Tokens are trimmed, empty tokens are dropped and duplicates collapse.
    /// An empty or blank input yields an empty set.
    pub fn decode(raw: &str) -> Self {
        raw.split(DELIMITER).collect()
    }

    /// Parses an optional delimited string; `None` yields an empty set.
    pub fn decode_opt(raw: Option<&str>) -> Self {
        raw.map(Self::decode).unwrap_or_default()
    }

    /// Joins the set back into its delimited form.
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                out.push(DELIMITER);
            }
            out.push_str(name);
        }
        out
    }

    /// Adds a permission after trimming it. Returns `false` if it was blank or already present.
    pub fn insert(&mut self, permission: impl AsRef<str>) -> bool {
        let name = permission.as_ref().trim();
        if name.is_empty() {
            return false;
        }
        self.0.insert(name.to_string())
    }

    /// Exact membership test.
    pub fn contains(&self, permission: &str) -> bool {
        self.0.contains(permission)
    }

    /// Number of permissions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the permission names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Flattens the set into a vector for transport.
    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl fmt::Display for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
