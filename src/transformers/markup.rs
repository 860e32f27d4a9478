//! Markup stripping.
//!
//! Every tag is removed, whatever its name or attributes, and only the text
//! content is kept. Comments are removed along with their content.
//! A `<` only opens a tag when followed by a letter, `/`, `!` or `?`,
//! so that comparisons such as `a < b` are kept.
//!
//! ```text
//! <p class="x">Hello <b>World</b>!</p><!-- note -->
//! ```
//!
//! becomes
//!
//! ```text
//! Hello World!
//! ```
use lazy_static::lazy_static;
use regex::Regex;

use super::Transform;

lazy_static! {
    // leftmost match wins, so a comment is consumed before its inner `>`.
    static ref MARKUP: Regex = Regex::new(r"(?s)<!--.*?-->|<[A-Za-z/!?][^>]*>").unwrap();
}

#[derive(Debug, Default)]
pub struct StripMarkup;

impl Transform for StripMarkup {
    fn transform_own(&self, mut text: String) -> String {
        // removing a tag can glue a `<` to a letter, forming a new one
        while text.contains('<') && MARKUP.is_match(&text) {
            text = MARKUP.replace_all(&text, "").into_owned();
        }
        text
    }
}
