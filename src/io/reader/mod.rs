/*! Corpus reading utilities

A corpus is either a JSON array of records, or JSON-Lines (one record per line).
[Framing::detect] tells both apart, and [Corpus] yields records in order whatever the framing.
Undecodable fragments are dropped by [decode::decode] before parsing.

!*/
pub mod corpus;
pub mod decode;
mod framing;
mod textreader;

pub use corpus::Corpus;
pub use framing::Framing;
pub use textreader::{ArrayReader, LineReader};
