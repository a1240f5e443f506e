use std::ffi::{OsStr, OsString};

/// Build/tool cache directories excluded from mirroring by default.
///
/// The list covers the caches a Python-heavy personal workspace accumulates;
/// runs can replace it wholesale through the `exclude_directories`
/// configuration key.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".venv",
    ".mypy_cache",
    ".tox",
    "__pycache__",
    ".ruff_cache",
    ".pytest_cache",
    ".google-drive-cache",
    ".selenium-cache",
];

/// Ordered set of directory basenames whose subtrees are omitted from
/// mirroring.
#[derive(Clone, Debug)]
pub struct ExclusionSet {
    names: Vec<OsString>,
}

impl ExclusionSet {
    /// Builds a set from the given basenames, preserving definition order and
    /// dropping duplicates.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut set = Self { names: Vec::new() };
        for name in names {
            let name = name.into();
            if !set.names.contains(&name) {
                set.names.push(name);
            }
        }
        set
    }

    /// Returns an empty set that excludes nothing.
    #[must_use]
    pub fn none() -> Self {
        Self { names: Vec::new() }
    }

    /// Reports whether a directory with the given basename must be skipped.
    #[must_use]
    pub fn is_excluded(&self, name: &OsStr) -> bool {
        self.names.iter().any(|excluded| excluded == name)
    }

    /// Returns the configured basenames in definition order.
    #[must_use]
    pub fn names(&self) -> &[OsString] {
        &self.names
    }

    /// Reports whether the set contains no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ExclusionSet {
    /// Builds the set from [`DEFAULT_EXCLUDED_DIRS`].
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_DIRS.iter().copied())
    }
}
