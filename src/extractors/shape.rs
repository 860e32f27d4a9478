//! Record shapes.
use log::debug;
use serde_json::{Map, Value};

use super::Extracted;

/// A shape recognizes raw records and projects them onto a question/answer pair.
pub trait Shape {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Returns [None] if the record does not have this shape.
    fn extract(&self, record: &Map<String, Value>) -> Option<Extracted>;
}

/// Shape made of two keys holding the question and the answer.
///
/// Both keys have to be present with string values.
#[derive(Debug, Clone)]
pub struct KeyPair {
    name: &'static str,
    question_key: &'static str,
    answer_key: &'static str,
    is_faq: bool,
}

impl KeyPair {
    pub const fn new(
        name: &'static str,
        question_key: &'static str,
        answer_key: &'static str,
        is_faq: bool,
    ) -> Self {
        Self {
            name,
            question_key,
            answer_key,
            is_faq,
        }
    }

    /// `{question, answer}`, the generic QA pair.
    pub const fn question_answer() -> Self {
        Self::new("question/answer", "question", "answer", false)
    }

    /// `{title, body}`, FAQ entries. These skip length filtering.
    pub const fn faq() -> Self {
        Self::new("faq", "title", "body", true)
    }
}

impl Shape for KeyPair {
    fn name(&self) -> &str {
        self.name
    }

    fn extract(&self, record: &Map<String, Value>) -> Option<Extracted> {
        let (question, answer) = match (record.get(self.question_key), record.get(self.answer_key))
        {
            (Some(q), Some(a)) => (q, a),
            _ => return None,
        };

        match (question.as_str(), answer.as_str()) {
            (Some(q), Some(a)) => Some(Extracted {
                question: q.to_string(),
                answer: a.to_string(),
                is_faq: self.is_faq,
            }),
            _ => {
                debug!(
                    "[{}] keys {}/{} present but not both strings",
                    self.name, self.question_key, self.answer_key
                );
                None
            }
        }
    }
}
