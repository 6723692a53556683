//! Identifier normalization.
//!
//! Schema names may contain spaces, punctuation and mixed case. Every
//! generated identifier is derived from the same word split:
//!
//! - any character that is not an ASCII letter or digit is dropped and ends
//!   the current word;
//! - a lower-case letter or digit followed by an upper-case letter starts a new
//!   word (`blogPost` -> `blog`, `Post`);
//! - the last capital of an upper-case run followed by a lower-case letter
//!   starts a new word (`HTTPServer` -> `HTTP`, `Server`).
//!
//! Digits stay attached to the word they follow.

/// Converts a schema name to an exported identifier (`blog posts` -> `BlogPosts`).
///
/// An empty result becomes `X`, and a result starting with a digit is prefixed
/// with `X`, so the output is always a valid exported identifier.
#[must_use]
pub fn to_exported_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    for word in split_words(name) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.push(first.to_ascii_uppercase());
            result.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    }

    if result.is_empty() || result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, 'X');
    }
    result
}

/// Converts a schema name to lower snake case (`BlogPosts` -> `blog_posts`).
///
/// Used for file and package names. An empty result becomes `x`.
#[must_use]
pub fn to_file_case(name: &str) -> String {
    let words: Vec<String> = split_words(name)
        .iter()
        .map(|w| w.to_ascii_lowercase())
        .collect();

    if words.is_empty() {
        return "x".to_string();
    }
    words.join("_")
}

/// Suffix appended to file stems the Go toolchain would treat specially.
pub const FILE_STEM_GUARD: &str = "collection";

/// Operating systems recognized in `_GOOS` file name suffixes.
const KNOWN_OS: &[&str] = &[
    "aix", "android", "darwin", "dragonfly", "freebsd", "hurd", "illumos", "ios", "js", "linux",
    "nacl", "netbsd", "openbsd", "plan9", "solaris", "wasip1", "windows", "zos",
];

/// Architectures recognized in `_GOARCH` file name suffixes.
const KNOWN_ARCH: &[&str] = &[
    "386", "amd64", "amd64p32", "arm", "armbe", "arm64", "arm64be", "loong64", "mips",
    "mipsle", "mips64", "mips64le", "mips64p32", "mips64p32le", "ppc", "ppc64", "ppc64le",
    "riscv", "riscv64", "s390", "s390x", "sparc", "sparc64", "wasm",
];

/// Go reserved keywords.
const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

/// Converts a schema name to the stem of a generated Go source file.
///
/// Like [`to_file_case`], but a stem whose last `_` segment is `test` or a
/// GOOS/GOARCH value gets a `_collection` suffix. Such files would otherwise be
/// compiled only by `go test` or only on one platform
/// (`login test` -> `login_test_collection`).
#[must_use]
pub fn to_source_file_stem(name: &str) -> String {
    let mut stem = to_file_case(name);
    let special = stem.rsplit_once('_').is_some_and(|(_, last)| {
        last == "test" || KNOWN_OS.contains(&last) || KNOWN_ARCH.contains(&last)
    });
    if special {
        stem.push('_');
        stem.push_str(FILE_STEM_GUARD);
    }
    stem
}

/// Returns true if `ident` is a Go keyword.
#[must_use]
pub fn is_go_keyword(ident: &str) -> bool {
    GO_KEYWORDS.contains(&ident)
}

/// Writes a raw name as a Go interpreted string literal, quotes included.
///
/// The literal evaluates to exactly the input, and never spans lines, so it is
/// safe inside both code and `//` comments.
#[must_use]
pub fn go_string_literal(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push('"');
    for c in raw.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = u32::from(c);
                if code <= 0xFFFF {
                    out.push_str(&format!("\\u{code:04x}"));
                } else {
                    out.push_str(&format!("\\U{code:08x}"));
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Splits a name into words.
fn split_words(name: &str) -> Vec<&str> {
    let bytes = name.as_bytes();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &b) in bytes.iter().enumerate() {
        if !b.is_ascii_alphanumeric() {
            if let Some(s) = start.take() {
                words.push(&name[s..i]);
            }
            continue;
        }

        if let Some(s) = start {
            let prev = bytes[i - 1];
            let next_is_lower = bytes.get(i + 1).is_some_and(u8::is_ascii_lowercase);
            let boundary = b.is_ascii_uppercase()
                && (prev.is_ascii_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_ascii_uppercase() && next_is_lower));
            if boundary {
                words.push(&name[s..i]);
                start = Some(i);
            }
        } else {
            start = Some(i);
        }
    }

    if let Some(s) = start {
        words.push(&name[s..]);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_exported_case() {
        assert_eq!(to_exported_case("blog posts"), "BlogPosts");
        assert_eq!(to_exported_case("user_id"), "UserId");
        assert_eq!(to_exported_case("order-type"), "OrderType");
        assert_eq!(to_exported_case("blogPost"), "BlogPost");
        assert_eq!(to_exported_case("HTTPServer"), "HttpServer");
        assert_eq!(to_exported_case("title"), "Title");
    }

    #[test]
    fn test_to_exported_case_edge_cases() {
        assert_eq!(to_exported_case(""), "X");
        assert_eq!(to_exported_case("!!!"), "X");
        assert_eq!(to_exported_case("2fa codes"), "X2faCodes");
        assert_eq!(to_exported_case("café"), "Caf");
        assert_eq!(to_exported_case("  spaced   out "), "SpacedOut");
    }

    #[test]
    fn test_to_file_case() {
        assert_eq!(to_file_case("blog posts"), "blog_posts");
        assert_eq!(to_file_case("BlogPosts"), "blog_posts");
        assert_eq!(to_file_case("clOrdId"), "cl_ord_id");
        assert_eq!(to_file_case("MDEntryPx"), "md_entry_px");
        assert_eq!(to_file_case("v2Items"), "v2_items");
        assert_eq!(to_file_case("***"), "x");
    }

    #[test]
    fn test_to_source_file_stem() {
        assert_eq!(to_source_file_stem("blog posts"), "blog_posts");
        assert_eq!(to_source_file_stem("login test"), "login_test_collection");
        assert_eq!(to_source_file_stem("servers linux"), "servers_linux_collection");
        assert_eq!(to_source_file_stem("builds_linux_amd64"), "builds_linux_amd64_collection");
        assert_eq!(to_source_file_stem("jobs wasm"), "jobs_wasm_collection");
        assert_eq!(to_source_file_stem("linux"), "linux");
        assert_eq!(to_source_file_stem("test"), "test");
        assert_eq!(to_source_file_stem("latest"), "latest");
        assert_eq!(to_source_file_stem("test results"), "test_results");
    }

    #[test]
    fn test_is_go_keyword() {
        assert!(is_go_keyword("type"));
        assert!(is_go_keyword("default"));
        assert!(!is_go_keyword("collections"));
        assert!(!is_go_keyword("Type"));
    }

    #[test]
    fn test_go_string_literal() {
        assert_eq!(go_string_literal("blog posts"), "\"blog posts\"");
        assert_eq!(go_string_literal("a\"b\\c"), r#""a\"b\\c""#);
        assert_eq!(go_string_literal("line\nbreak"), r#""line\nbreak""#);
        assert_eq!(go_string_literal("\u{7}"), r#""\u0007""#);
        assert_eq!(go_string_literal("ünï"), "\"ünï\"");
    }

    #[test]
    fn test_normalization_is_deterministic() {
        for name in ["blog posts", "HTTPServer", "a.b/c", "ünïcode"] {
            assert_eq!(to_exported_case(name), to_exported_case(name));
            assert_eq!(to_file_case(name), to_file_case(name));
        }
    }
}
