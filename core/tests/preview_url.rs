use atelier_core::preview_url::{parse_preview_url, sanitize, PreviewUrlError, DEFAULT_PREVIEW_URL};
use proptest::prelude::*;
use url::Url;

#[test]
fn empty_and_blank_fall_back_to_default() {
    assert_eq!(sanitize(""), DEFAULT_PREVIEW_URL);
    assert_eq!(sanitize("   "), DEFAULT_PREVIEW_URL);
    assert_eq!(sanitize("\t\n"), DEFAULT_PREVIEW_URL);
    assert_eq!(parse_preview_url("  "), Err(PreviewUrlError::Empty));
}

#[test]
fn bare_host_gets_scheme_and_trailing_slash() {
    assert_eq!(sanitize("example.com"), "https://example.com/");
    assert_eq!(sanitize("  preview-123.example.com  "), "https://preview-123.example.com/");
}

#[test]
fn absolute_url_is_kept() {
    assert_eq!(sanitize("https://foo.bar/path"), "https://foo.bar/path");
    assert_eq!(sanitize("http://foo.bar/a?b=c#d"), "http://foo.bar/a?b=c#d");
}

#[test]
fn unparsable_input_falls_back() {
    assert_eq!(sanitize("not a url at all ://"), DEFAULT_PREVIEW_URL);
    assert_eq!(sanitize("https://"), DEFAULT_PREVIEW_URL);
    assert_eq!(sanitize("example.com:99999"), DEFAULT_PREVIEW_URL);
}

#[test]
fn canonicalization_normalizes_host_and_encoding() {
    assert_eq!(sanitize("https://EXAMPLE.com"), "https://example.com/");
    assert_eq!(sanitize("example.com/a b"), "https://example.com/a%20b");
    assert_eq!(sanitize("http://example.com:80/"), "http://example.com/");
}

#[test]
fn scheme_prefix_is_textual() {
    // Prefixed to `https://httpx://foo`, which parses with an empty port.
    assert_eq!(sanitize("httpx://foo"), "https://httpx//foo");
    assert_eq!(sanitize("ftp://files.example.com"), "https://ftp//files.example.com");
}

#[test]
fn known_inputs_are_idempotent() {
    for input in [
        "",
        "example.com",
        "https://foo.bar/path",
        "httpx://foo",
        "example.com/a b",
        "not a url at all ://",
    ] {
        let once = sanitize(input);
        assert_eq!(sanitize(&once), once, "input {input:?}");
    }
}

proptest! {
    #[test]
    fn sanitize_is_total_and_absolute(input in "[a-zA-Z0-9./:?#@ _-]{0,40}") {
        let out = sanitize(&input);
        prop_assert!(!out.is_empty());
        let parsed = Url::parse(&out);
        prop_assert!(parsed.is_ok());
        let scheme = parsed.unwrap().scheme().to_string();
        prop_assert!(scheme == "http" || scheme == "https");
    }

    #[test]
    fn sanitize_is_idempotent(input in "[a-zA-Z0-9./:?#@ _-]{0,40}") {
        let once = sanitize(&input);
        prop_assert_eq!(sanitize(&once), once);
    }
}
