/// Format a path for display, replacing home directory with ~
pub fn format_path(path: &std::path::Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

/// Format file count with appropriate plural
pub fn format_count(count: usize) -> String {
    if count == 1 {
        "1 daemon".to_string()
    } else {
        format!("{} daemons", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0 daemons");
        assert_eq!(format_count(1), "1 daemon");
        assert_eq!(format_count(42), "42 daemons");
    }

    #[test]
    fn test_format_path_without_home() {
        let path = std::path::Path::new("/tmp/test.txt");
        assert_eq!(format_path(path), "/tmp/test.txt");
    }

    #[test]
    fn test_format_path_with_home() {
        if let Some(home) = dirs::home_dir() {
            let formatted = format_path(&home.join("Library/LaunchAgents"));
            assert_eq!(formatted, "~/Library/LaunchAgents");
        }
    }
}
