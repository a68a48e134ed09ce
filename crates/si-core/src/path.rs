//! Path normalization for file references coming from the clipboard, the file
//! manager or the persisted stack.
//!
//! Rules, applied in order:
//! 1. Strip a leading `file://`, `file:///` or `file://localhost/` prefix (any case).
//! 2. Percent-decode. A malformed escape or a non UTF-8 result keeps the
//!    undecoded string.
//! 3. Prepend `/` when the result is not absolute.
//!
//! Empty input stays empty so callers can filter it out.

const FILE_SCHEME: &str = "file://";
const LOCALHOST: &str = "localhost/";

/// Turn any supported path encoding into a canonical absolute path.
///
/// ```
/// use si_core::normalize_path;
///
/// assert_eq!(normalize_path("file:///Users/x/my%20file.pdf"), "/Users/x/my file.pdf");
/// assert_eq!(normalize_path("/Users/x/report.pdf"), "/Users/x/report.pdf");
/// ```
pub fn normalize_path(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let stripped = strip_file_scheme(raw);
    let decoded = percent_decode_or_keep(stripped);

    if decoded.starts_with('/') {
        decoded
    } else {
        format!("/{decoded}")
    }
}

fn strip_file_scheme(raw: &str) -> &str {
    let Some(rest) = strip_prefix_ignore_case(raw, FILE_SCHEME) else {
        return raw;
    };
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    strip_prefix_ignore_case(rest, LOCALHOST).unwrap_or(rest)
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        s.get(prefix.len()..)
    } else {
        None
    }
}

fn percent_decode_or_keep(s: &str) -> String {
    if has_malformed_escape(s) {
        return s.to_string();
    }
    match urlencoding::decode(s) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => s.to_string(),
    }
}

/// A `%` must be followed by exactly two hex digits.
fn has_malformed_escape(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        let hex_at = |idx: usize| bytes.get(idx).is_some_and(|b| b.is_ascii_hexdigit());
        if !(hex_at(i + 1) && hex_at(i + 2)) {
            return true;
        }
        i += 3;
    }
    false
}

/// Final non-empty segment of a normalized path, used as the item display name.
pub fn file_name_of(path: &str) -> Option<&str> {
    path.rsplit('/').find(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_are_fixed_points() {
        for p in [
            "/Users/x/report.pdf",
            "/tmp/a b/c.txt",
            "/",
            "/Users/x/100% done.txt",
            "/Users/x/ünïcødé.md",
        ] {
            assert_eq!(normalize_path(p), p, "path {p:?}");
        }
    }

    #[test]
    fn equivalent_encodings_share_one_canonical_form() {
        let expected = "/Users/x/my file.pdf";
        for raw in [
            "file:///Users/x/my%20file.pdf",
            "FILE:///Users/x/my%20file.pdf",
            "file://localhost/Users/x/my%20file.pdf",
            "file://Users/x/my file.pdf",
            "Users/x/my%20file.pdf",
            "/Users/x/my%20file.pdf",
            "/Users/x/my file.pdf",
        ] {
            assert_eq!(normalize_path(raw), expected, "raw {raw:?}");
        }
    }

    #[test]
    fn localhost_prefix_is_case_insensitive() {
        assert_eq!(normalize_path("File://LocalHost/etc/hosts"), "/etc/hosts");
    }

    #[test]
    fn malformed_escape_keeps_undecoded_string() {
        assert_eq!(normalize_path("file:///tmp/50%zz%20off"), "/tmp/50%zz%20off");
        assert_eq!(normalize_path("/tmp/trailing%2"), "/tmp/trailing%2");
    }

    #[test]
    fn invalid_utf8_escape_keeps_undecoded_string() {
        assert_eq!(normalize_path("/tmp/%FF.bin"), "/tmp/%FF.bin");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in [
            "file:///Users/x/a%20b.txt",
            "relative/dir/file",
            "file://localhost/private/tmp/x",
            "/already/absolute",
            "",
            "file:///tmp/50%zz",
        ] {
            let once = normalize_path(raw);
            assert_eq!(normalize_path(&once), once, "raw {raw:?}");
        }
    }

    #[test]
    fn multibyte_input_shorter_than_scheme_does_not_panic() {
        assert_eq!(normalize_path("fïle"), "/fïle");
    }

    #[test]
    fn file_name_uses_last_non_empty_segment() {
        assert_eq!(file_name_of("/Users/x/report.pdf"), Some("report.pdf"));
        assert_eq!(file_name_of("/Users/x/folder/"), Some("folder"));
        assert_eq!(file_name_of("/"), None);
    }
}
