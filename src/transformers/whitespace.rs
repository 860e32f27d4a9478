use itertools::Itertools;

use super::Transform;

/// Collapses whitespace runs (newlines and tabs included) into a single space,
/// and trims both ends.
#[derive(Debug, Default)]
pub struct CollapseWhitespace;

impl Transform for CollapseWhitespace {
    fn transform_own(&self, text: String) -> String {
        text.split_whitespace().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse() {
        let t = CollapseWhitespace::default();
        assert_eq!(t.transform_own("Line1\n\nLine2".to_string()), "Line1 Line2");
        assert_eq!(
            t.transform_own("  \ta \u{3000} b\r\n".to_string()),
            "a b"
        );
    }

    #[test]
    fn only_whitespace() {
        let t = CollapseWhitespace::default();
        assert_eq!(t.transform_own(" \n\t ".to_string()), "");
    }
}
