//! Provenance marker written at the end of every generated README.

use std::sync::LazyLock;

use regex::bytes::Regex;

/// Matches a marker line, capturing the package that generated the file.
///
/// The capture runs in byte mode so invalid UTF-8 in the package name still
/// matches.
static MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--- generated by goreadme for ((?-u:[^\n])*)-->")
        .expect("MARKER_REGEX must compile")
});

/// The marker line for `pkg`, without a trailing newline.
pub fn marker_line(pkg: &str) -> String {
    format!("<!--- generated by goreadme for {}-->", pkg)
}

/// Extract the generating package from README content.
///
/// Returns `None` when the content carries no marker, which is how
/// hand-written READMEs are told apart from generated ones.
pub fn readme_package(content: &[u8]) -> Option<String> {
    let caps = MARKER_REGEX.captures(content)?;
    let pkg = caps.get(1)?;
    Some(String::from_utf8_lossy(pkg.as_bytes()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_line_has_no_space_before_close() {
        insta::assert_snapshot!(
            marker_line("github.com/example/pkg"),
            @"<!--- generated by goreadme for github.com/example/pkg-->"
        );
    }

    #[test]
    fn extracts_package_from_marker() {
        let content = b"# pkg\n\nDocs.\n\n<!--- generated by goreadme for github.com/example/pkg-->\n";
        assert_eq!(
            readme_package(content),
            Some("github.com/example/pkg".to_string())
        );
    }

    #[test]
    fn marker_line_round_trips() {
        let line = marker_line("example.com/a/b");
        assert_eq!(
            readme_package(line.as_bytes()),
            Some("example.com/a/b".to_string())
        );
    }

    #[test]
    fn no_marker_returns_none() {
        assert_eq!(readme_package(b"# Hand-written README\n"), None);
        assert_eq!(readme_package(b""), None);
    }

    #[test]
    fn marker_with_space_before_close_keeps_space() {
        let content = b"<!--- generated by goreadme for pkg -->";
        assert_eq!(readme_package(content), Some("pkg ".to_string()));
    }

    #[test]
    fn marker_does_not_span_lines() {
        let content = b"<!--- generated by goreadme for pkg\n-->";
        assert_eq!(readme_package(content), None);
    }

    #[test]
    fn invalid_utf8_package_is_still_found() {
        let content = b"<!--- generated by goreadme for pkg\xff/sub-->\n";
        assert_eq!(readme_package(content), Some("pkg\u{FFFD}/sub".to_string()));
    }

    #[test]
    fn first_marker_wins() {
        let content = b"<!--- generated by goreadme for first-->\n<!--- generated by goreadme for second-->\n";
        assert_eq!(readme_package(content), Some("first".to_string()));
    }
}
