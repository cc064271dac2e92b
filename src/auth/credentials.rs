//! Credential table
//!
//! Fixed username-to-password mapping used for membership tests.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Static credential table, read-only for the process lifetime
pub(crate) static PWDB: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut creds = HashMap::new();
    creds.insert("pelita", "81d");
    creds.insert("aspp", "8d91");
    creds.insert("ASPP", "1djk");
    creds.insert("tiziano", "asd,123");
    creds
});

/// Returns true if `username` is a key in the table. Case-sensitive, no delay.
pub fn contains(username: &str) -> bool {
    PWDB.contains_key(username)
}

/// Iterates over every username in the table
pub fn usernames() -> impl Iterator<Item = &'static str> {
    PWDB.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_users_present() {
        for name in ["pelita", "aspp", "ASPP", "tiziano"] {
            assert!(contains(name), "{name} should be in the table");
        }
    }

    #[test]
    fn test_case_sensitive() {
        assert!(contains("aspp"));
        assert!(contains("ASPP"));
        assert!(!contains("Aspp"));
        assert!(!contains("PELITA"));
    }

    #[test]
    fn test_usernames_lists_all_keys() {
        let mut names: Vec<_> = usernames().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["ASPP", "aspp", "pelita", "tiziano"]);
    }
}
