/*! Records

A raw record is whatever JSON value a corpus holds. Only objects can be
question/answer records, see [crate::extractors] for the accepted shapes.

A [QaRecord] is the canonical, cleaned form that is written to shards.
!*/
use serde::{Deserialize, Serialize};

use crate::extractors::Extracted;
use crate::transformers::Transform;

/// Untyped record, as found in a corpus.
pub type RawRecord = serde_json::Value;

/// Canonical question/answer pair.
///
/// Serialized as `{"question": ..., "answer": ...}`, in that order.
/// Missing keys are read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaRecord {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

impl QaRecord {
    pub fn new(question: String, answer: String) -> Self {
        Self { question, answer }
    }

    /// Build a record from extracted values, running both through `transform`.
    pub fn cleaned(extracted: Extracted, transform: &impl Transform) -> Self {
        Self {
            question: transform.transform_own(extracted.question),
            answer: transform.transform_own(extracted.answer),
        }
    }
}
