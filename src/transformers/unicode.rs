//! Unicode normalization.
use unicode_normalization::{is_nfkc_quick, IsNormalized, UnicodeNormalization};

use super::Transform;

/// NFKC normalization.
///
/// Compatibility variants are folded into their canonical composed form,
/// so that `"\u{212b}"` (ANGSTROM SIGN) becomes `"Å"`.
#[derive(Debug, Default)]
pub struct Nfkc;

impl Transform for Nfkc {
    fn transform_own(&self, text: String) -> String {
        if is_nfkc_quick(text.chars()) == IsNormalized::Yes {
            return text;
        }
        text.nfkc().collect()
    }
}
