//! Helpers for unique test data
//!
//! ULID-based values keep player names and game ids distinct across test
//! runs that share a data directory.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use scorekeeper_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("player");
/// let id2 = unique_str("player");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("player-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate `count` unique player names sharing a prefix.
///
/// ```
/// use scorekeeper_test_support::unique_helpers::unique_names;
///
/// let names = unique_names("p", 3);
/// assert_eq!(names.len(), 3);
/// assert_ne!(names[0], names[1]);
/// ```
pub fn unique_names(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|_| unique_str(prefix)).collect()
}
