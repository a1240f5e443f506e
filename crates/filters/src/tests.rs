use super::*;
use std::ffi::OsStr;

#[test]
fn matches_exact_basename_only() {
    let exclusions = ExclusionSet::new([".venv"]);
    assert!(exclusions.is_excluded(OsStr::new(".venv")));
    assert!(!exclusions.is_excluded(OsStr::new(".venv-old")));
    assert!(!exclusions.is_excluded(OsStr::new("venv")));
}

#[test]
fn preserves_definition_order_and_deduplicates() {
    let exclusions = ExclusionSet::new(["b", "a", "b", "c", "a"]);
    let names: Vec<_> = exclusions
        .names()
        .iter()
        .map(|name| name.to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["b", "a", "c"]);
}

#[test]
fn default_set_covers_known_cache_directories() {
    let exclusions = ExclusionSet::default();
    for name in DEFAULT_EXCLUDED_DIRS {
        assert!(
            exclusions.is_excluded(OsStr::new(name)),
            "{name} should be excluded by default"
        );
    }
    assert_eq!(exclusions.names().len(), DEFAULT_EXCLUDED_DIRS.len());
}

#[test]
fn empty_set_excludes_nothing() {
    let exclusions = ExclusionSet::none();
    assert!(exclusions.is_empty());
    assert!(!exclusions.is_excluded(OsStr::new(".venv")));
}
