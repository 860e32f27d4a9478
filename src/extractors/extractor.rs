use lazy_static::lazy_static;
use log::debug;

use crate::record::RawRecord;

use super::shape::{KeyPair, Shape};

lazy_static! {
    static ref DEFAULT_EXTRACTOR: Extractor = Extractor::default();
}

/// Raw question and answer, as found in the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub question: String,
    pub answer: String,
    /// `true` if the record is an FAQ entry, that is exempt from length filtering.
    pub is_faq: bool,
}

/// Extracts with the default [Extractor].
pub fn extract(record: &RawRecord) -> Option<Extracted> {
    DEFAULT_EXTRACTOR.extract(record)
}

/// Ordered list of shapes. The first matching shape wins.
pub struct Extractor {
    shapes: Vec<Box<dyn Shape + Send + Sync>>,
}

impl Extractor {
    /// Extractor that recognizes nothing.
    pub fn empty() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Append a shape, tried after the already present ones.
    pub fn add(&mut self, shape: Box<dyn Shape + Send + Sync>) -> &mut Extractor {
        self.shapes.push(shape);
        self
    }

    /// Returns [None] for records that are not objects, or that match no shape.
    pub fn extract(&self, record: &RawRecord) -> Option<Extracted> {
        let record = record.as_object()?;
        self.shapes.iter().find_map(|shape| {
            let extracted = shape.extract(record);
            if extracted.is_some() {
                debug!("record matched shape {}", shape.name());
            }
            extracted
        })
    }
}

impl Default for Extractor {
    /// `{question, answer}` then `{title, body}`.
    fn default() -> Self {
        let mut e = Self::empty();
        e.add(Box::new(KeyPair::question_answer()))
            .add(Box::new(KeyPair::faq()));
        e
    }
}
