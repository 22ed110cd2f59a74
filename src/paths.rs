use crate::unit::Unit;

/// Split a path into its directory prefix and base name at the rightmost
/// separator (`\` or `/`).
///
/// The directory prefix never includes the trailing separator; this is the
/// one convention used everywhere in the crate. An input with no separator
/// (or an empty input) yields an empty `dir` and `base == s`. Both returns
/// are subslices of the input; nothing is allocated.
pub fn split_path<U: Unit>(s: &[U]) -> (&[U], &[U]) {
    match s.iter().rposition(|u| u.is_separator()) {
        Some(i) => (&s[..i], &s[i + 1..]),
        None => (&s[..0], s),
    }
}

/// True when `s` contains a wildcard metacharacter (`*` or `?`).
pub fn is_wildcard<U: Unit>(s: &[U]) -> bool {
    s.iter().any(|u| u.is('*') || u.is('?'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(s: &str) -> (&str, &str) {
        let (dir, base) = split_path(s.as_bytes());
        (
            std::str::from_utf8(dir).unwrap(),
            std::str::from_utf8(base).unwrap(),
        )
    }

    #[test]
    fn split_no_separator() {
        assert_eq!(split("file.txt"), ("", "file.txt"));
    }

    #[test]
    fn split_empty() {
        assert_eq!(split(""), ("", ""));
    }

    #[test]
    fn split_forward_slash() {
        assert_eq!(split("a/b/c.txt"), ("a/b", "c.txt"));
    }

    #[test]
    fn split_backslash() {
        assert_eq!(split("a\\b\\c.txt"), ("a\\b", "c.txt"));
    }

    #[test]
    fn split_mixed_uses_rightmost() {
        assert_eq!(split("a\\b/c"), ("a\\b", "c"));
        assert_eq!(split("a/b\\c"), ("a/b", "c"));
    }

    #[test]
    fn split_trailing_separator() {
        assert_eq!(split("dir/"), ("dir", ""));
    }

    #[test]
    fn split_only_separators() {
        assert_eq!(split("//"), ("/", ""));
    }

    #[test]
    fn wildcard_detection() {
        assert!(is_wildcard(b"*.txt".as_slice()));
        assert!(is_wildcard(b"file?".as_slice()));
        assert!(!is_wildcard(b"plain/name.txt".as_slice()));
        assert!(!is_wildcard(b"".as_slice()));
    }
}
