/*! Dataset statistics

Single pass over a cleaned JSONL file, counting records,
question/answer tokens and distinct tokens (case-sensitive).
!*/
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::filtering::tokens;
use crate::io::create_parent_dir;
use crate::io::reader::LineReader;
use crate::record::QaRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub num_records: usize,
    pub avg_question_tokens: f64,
    pub avg_answer_tokens: f64,
    pub vocab_size: usize,
}

impl fmt::Display for DatasetStats {
    /// Markdown report.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Dataset Statistics")?;
        writeln!(f, "- Number of records: {}", self.num_records)?;
        writeln!(f, "- Average question tokens: {:.2}", self.avg_question_tokens)?;
        writeln!(f, "- Average answer tokens: {:.2}", self.avg_answer_tokens)?;
        writeln!(f, "- Vocabulary size: {}", self.vocab_size)
    }
}

/// Running totals.
#[derive(Debug, Default)]
struct Accumulator {
    nb_records: usize,
    question_tokens: usize,
    answer_tokens: usize,
    vocab: HashSet<String>,
}

impl Accumulator {
    fn add(&mut self, record: &QaRecord) {
        self.nb_records += 1;
        for token in tokens(&record.question) {
            self.question_tokens += 1;
            self.add_token(token);
        }
        for token in tokens(&record.answer) {
            self.answer_tokens += 1;
            self.add_token(token);
        }
    }

    fn add_token(&mut self, token: &str) {
        if !self.vocab.contains(token) {
            self.vocab.insert(token.to_string());
        }
    }

    fn average(total: usize, count: usize) -> f64 {
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    fn finish(self) -> DatasetStats {
        DatasetStats {
            num_records: self.nb_records,
            avg_question_tokens: Self::average(self.question_tokens, self.nb_records),
            avg_answer_tokens: Self::average(self.answer_tokens, self.nb_records),
            vocab_size: self.vocab.len(),
        }
    }
}

/// Compute stats over JSONL content. Blank lines are ignored.
pub fn compute_stats_from<R: BufRead>(reader: R) -> Result<DatasetStats, Error> {
    let mut acc = Accumulator::default();
    let mut lines = LineReader::new(reader);

    while let Some(value) = lines.next() {
        let record: QaRecord = serde_json::from_value(value?).map_err(|source| Error::MalformedRecord {
            line: lines.line(),
            source,
        })?;
        acc.add(&record);
    }

    Ok(acc.finish())
}

/// Compute stats of the JSONL file at `src`.
pub fn compute_stats(src: &Path) -> Result<DatasetStats, Error> {
    info!("computing stats of {:?}", src);
    let f = File::open(src)?;
    compute_stats_from(BufReader::new(f))
}

/// Write the markdown report of `stats` to `dst`, creating its parent folder if needed.
pub fn write_report(stats: &DatasetStats, dst: &Path) -> Result<(), Error> {
    create_parent_dir(dst)?;
    let mut f = File::create(dst)?;
    write!(f, "{}", stats)?;
    Ok(())
}
