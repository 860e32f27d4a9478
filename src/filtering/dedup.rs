//! Answer-based deduplication.
use std::collections::HashSet;

use super::FilterMut;

/// Set of answers accepted so far.
///
/// Keeps the first occurrence of each answer, and rejects the following ones.
/// Lives as long as a single cleaning run.
#[derive(Debug, Default)]
pub struct SeenAnswers {
    seen: HashSet<String>,
}

impl SeenAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl FilterMut<&str> for SeenAnswers {
    /// Returns `true` (and remembers the answer) if it has not been seen yet.
    fn detect_mut(&mut self, answer: &str) -> bool {
        if self.seen.contains(answer) {
            return false;
        }
        self.seen.insert(answer.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_wins() {
        let mut f = SeenAnswers::new();
        assert!(f.detect_mut("42"));
        assert!(f.detect_mut("43"));
        assert!(!f.detect_mut("42"));
        assert_eq!(f.len(), 2);
    }

    #[test]
    fn empty_answer_is_a_key() {
        let mut f = SeenAnswers::new();
        assert!(f.is_empty());
        assert!(f.detect_mut(""));
        assert!(!f.detect_mut(""));
    }

    #[test]
    fn independent_runs() {
        let mut a = SeenAnswers::new();
        let mut b = SeenAnswers::new();
        assert!(a.detect_mut("same"));
        assert!(b.detect_mut("same"));
    }
}
