/*! Filtering utilities

Filters operate on cleaned question/answer pairs.

Filters implement [filter::Filter], [filter::FilterMut] or both:
- [filter::Filter] is implemented for filters that do not have state (see [TokenLength] for example)
- [filter::FilterMut] is implemented for filter that do have state (see [SeenAnswers], whose detection depends on what has been seen before).
! */
mod dedup;
mod filter;
mod length;

pub use dedup::SeenAnswers;
pub use filter::Filter;
pub use filter::FilterMut;
pub use length::{count_tokens, tokens, TokenLength};
