/*! Text transformers.

Transforms raw question/answer text into its normalized form.

Each step implements [Transform], and [Normalizer] chains them in order.

!*/

mod markup;
mod normalizer;
mod transform;
mod unicode;
mod whitespace;

pub use markup::StripMarkup;
pub use normalizer::{normalize, Normalizer};
pub use transform::Transform;
pub use unicode::Nfkc;
pub use whitespace::CollapseWhitespace;
