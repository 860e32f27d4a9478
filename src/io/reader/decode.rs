/*! Corpus decoding

Turns raw bytes into JSON text, dropping the fragments that cannot be decoded:

- invalid UTF-8 sequences,
- unpaired UTF-16 surrogate escapes (`"\ud800"`), that are valid JSON syntax but have no `char` counterpart.

Well-formed text, including a literal U+FFFD, is returned untouched.
!*/
use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref SURROGATE_ESCAPE: Regex = Regex::new(r"\\u[dD][89a-fA-F]").unwrap();
    // escaped backslashes are matched by the last alternative so that `\\ud800` stays text.
    static ref ESCAPE: Regex = Regex::new(
        r"(?s)\\(?:(u[dD][89abAB][0-9a-fA-F]{2}\\u[dD][c-fC-F][0-9a-fA-F]{2})|(u[dD][89a-fA-F][0-9a-fA-F]{2})|.)"
    )
    .unwrap();
}

/// Decodes `bytes`, returning the text and the number of dropped fragments.
pub fn decode(bytes: &[u8]) -> (Cow<'_, str>, usize) {
    let (text, invalid) = drop_invalid_utf8(bytes);
    let (text, surrogates) = drop_lone_surrogates(text);
    (text, invalid + surrogates)
}

fn drop_invalid_utf8(bytes: &[u8]) -> (Cow<'_, str>, usize) {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return (Cow::Borrowed(text), 0);
    }

    let mut text = String::with_capacity(bytes.len());
    let mut dropped = 0;
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        if !chunk.invalid().is_empty() {
            dropped += 1;
        }
    }
    (Cow::Owned(text), dropped)
}

fn drop_lone_surrogates(text: Cow<'_, str>) -> (Cow<'_, str>, usize) {
    if !SURROGATE_ESCAPE.is_match(&text) {
        return (text, 0);
    }

    let mut dropped = 0;
    let replaced = ESCAPE
        .replace_all(&text, |caps: &Captures| {
            if caps.get(2).is_some() {
                dropped += 1;
                String::new()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned();
    (Cow::Owned(replaced), dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_is_borrowed() {
        let (text, dropped) = decode("{\"a\": \"déjà \u{fffd}\"}".as_bytes());
        assert!(matches!(text, Cow::Borrowed(_)));
        assert_eq!(text, "{\"a\": \"déjà \u{fffd}\"}");
        assert_eq!(dropped, 0);
    }

    #[test]
    fn invalid_utf8() {
        let (text, dropped) = decode(b"caf\xff\xfee and \xc3");
        assert_eq!(text, "cafe and ");
        assert_eq!(dropped, 2);
    }

    #[test]
    fn lone_surrogates() {
        let (text, dropped) = decode(br#"{"title": "q\ud800x", "body": "\uDC00a\ud83d"}"#);
        assert_eq!(text, r#"{"title": "qx", "body": "a"}"#);
        assert_eq!(dropped, 3);
    }

    #[test]
    fn surrogate_pairs_kept() {
        let json = r#"{"a": "\ud83d\ude00 \uD83D\uDE00"}"#;
        let (text, dropped) = decode(json.as_bytes());
        assert_eq!(text, json);
        assert_eq!(dropped, 0);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["a"], "😀 😀");
    }

    #[test]
    fn escaped_backslash_is_not_an_escape() {
        let json = r#"{"a": "\\ud800 \\\ud800 é"}"#;
        let (text, dropped) = decode(json.as_bytes());
        assert_eq!(text, r#"{"a": "\\ud800 \\ é"}"#);
        assert_eq!(dropped, 1);
    }
}
