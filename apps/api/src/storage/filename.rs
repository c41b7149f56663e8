use chrono::{DateTime, Local};

/// Reduces an untrusted upload filename to a safe flat name: keeps only the
/// final path component (either separator style), maps spaces to underscores,
/// and drops everything outside `[A-Za-z0-9._-]`. Leading and trailing dots
/// are stripped so the result can never be a dotfile or a traversal segment.
/// A name with nothing left falls back to `resume`.
pub fn sanitize(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);

    let cleaned: String = base
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    let cleaned = cleaned.trim_matches('.');
    if cleaned.is_empty() {
        "resume".to_string()
    } else {
        cleaned.to_string()
    }
}

/// Prepends a `YYYYMMDD_HHMMSS` prefix so repeat uploads of the same name get
/// distinct files. Second-granularity, same as the original deployment.
pub fn timestamped(filename: &str, now: DateTime<Local>) -> String {
    format!("{}_{}", now.format("%Y%m%d_%H%M%S"), filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sanitize_plain_name_unchanged() {
        assert_eq!(sanitize("resume.pdf"), "resume.pdf");
    }

    #[test]
    fn test_sanitize_strips_traversal() {
        assert_eq!(sanitize("../../etc/passwd"), "passwd");
    }

    #[test]
    fn test_sanitize_strips_windows_paths() {
        assert_eq!(sanitize("..\\..\\boot.ini"), "boot.ini");
    }

    #[test]
    fn test_sanitize_maps_spaces_to_underscores() {
        assert_eq!(sanitize("my resume final.pdf"), "my_resume_final.pdf");
    }

    #[test]
    fn test_sanitize_drops_shell_characters() {
        assert_eq!(sanitize("re$ume;rm -rf.pdf"), "reumerm_-rf.pdf");
    }

    #[test]
    fn test_sanitize_rejects_dotfiles() {
        assert_eq!(sanitize(".bashrc"), "bashrc");
    }

    #[test]
    fn test_sanitize_empty_falls_back() {
        assert_eq!(sanitize("...."), "resume");
        assert_eq!(sanitize("///"), "resume");
    }

    #[test]
    fn test_timestamped_format() {
        let now = Local.with_ymd_and_hms(2024, 3, 7, 14, 30, 5).unwrap();
        assert_eq!(timestamped("resume.pdf", now), "20240307_143005_resume.pdf");
    }

    #[test]
    fn test_timestamped_distinct_seconds_distinct_names() {
        let a = Local.with_ymd_and_hms(2024, 3, 7, 14, 30, 5).unwrap();
        let b = Local.with_ymd_and_hms(2024, 3, 7, 14, 30, 6).unwrap();
        assert_ne!(timestamped("resume.pdf", a), timestamped("resume.pdf", b));
    }
}
