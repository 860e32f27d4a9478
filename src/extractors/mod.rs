/*! Question/answer extraction

Corpora come from different sources and name their fields differently.
An [Extractor] holds an ordered list of [Shape]s, and the first one that
matches a raw record gives its question and answer.

Adding a new source format means appending a new [Shape].
!*/
mod extractor;
mod shape;

pub use extractor::{extract, Extracted, Extractor};
pub use shape::{KeyPair, Shape};
