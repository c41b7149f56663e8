/// Checks whether the file's extension (text after the last `.`,
/// case-insensitive) is in the allow-list. A filename with no `.` is
/// rejected.
pub fn allowed_file(filename: &str, allowed: &[String]) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)),
        None => false,
    }
}
