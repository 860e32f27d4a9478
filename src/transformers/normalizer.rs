//! Text normalization chain.
//!
//! 1. NFKC
//! 1. markup stripping
//! 1. NFKC again, since removing a tag can leave a combining mark next to a base character
//! 1. whitespace collapsing
//!
//! Undecodable fragments never get here: they are dropped while the corpus is
//! decoded (see [crate::io::reader::decode]). The whole chain is idempotent.
use lazy_static::lazy_static;

use super::{CollapseWhitespace, Nfkc, StripMarkup, Transform};

lazy_static! {
    static ref DEFAULT_NORMALIZER: Normalizer = Normalizer::default();
}

/// Normalizes text with the default [Normalizer].
pub fn normalize(text: &str) -> String {
    DEFAULT_NORMALIZER.transform_own(text.to_string())
}

/// Normalizer enables transform chaining, adding multiple transforms and
/// applying them in one step.
pub struct Normalizer(Vec<Box<dyn Transform + Send + Sync>>);

impl Normalizer {
    /// Creates an empty chain, that returns text untouched.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn add(&mut self, transform: Box<dyn Transform + Send + Sync>) -> &mut Normalizer {
        self.0.push(transform);
        self
    }
}

impl Transform for Normalizer {
    fn transform_own(&self, text: String) -> String {
        self.0
            .iter()
            .fold(text, |text, transform| transform.transform_own(text))
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        let mut n = Self::empty();
        n.add(Box::new(Nfkc))
            .add(Box::new(StripMarkup))
            .add(Box::new(Nfkc))
            .add(Box::new(CollapseWhitespace));
        n
    }
}
