/// Return true iff any allowed entry is a literal prefix of `filename`.
///
/// Matching is case-sensitive and has no delimiter requirement, so the
/// prefix "com.app" accepts "com.apple.foo". An empty allowlist accepts
/// nothing.
pub fn is_known(filename: &str, allowed: &[String]) -> bool {
    allowed.iter().any(|prefix| filename.starts_with(prefix.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowlist(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_allowlist_accepts_nothing() {
        assert!(!is_known("com.apple.foo.plist", &[]));
    }

    #[test]
    fn test_exact_name_is_known() {
        let allowed = allowlist(&["com.apple.foo.plist"]);
        assert!(is_known("com.apple.foo.plist", &allowed));
    }

    #[test]
    fn test_prefix_match() {
        let allowed = allowlist(&["com.apple"]);
        assert!(is_known("com.apple.foo.plist", &allowed));
        assert!(!is_known("org.mozilla.updater.plist", &allowed));
    }

    #[test]
    fn test_no_delimiter_requirement() {
        // "com.app" is a valid prefix of "com.apple.foo"
        let allowed = allowlist(&["com.app"]);
        assert!(is_known("com.apple.foo", &allowed));
    }

    #[test]
    fn test_case_sensitive() {
        let allowed = allowlist(&["com.apple"]);
        assert!(!is_known("Com.Apple.foo", &allowed));
    }

    #[test]
    fn test_any_entry_may_match() {
        let allowed = allowlist(&["com.apple", "org.mozilla", "com.docker"]);
        assert!(is_known("org.mozilla.updater", &allowed));
        assert!(is_known("com.docker.vmnetd", &allowed));
        assert!(!is_known("evil.bar", &allowed));
    }

    #[test]
    fn test_suffix_is_not_a_match() {
        let allowed = allowlist(&["apple"]);
        assert!(!is_known("com.apple.foo", &allowed));
    }
}
