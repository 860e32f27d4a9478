//! Question/answer corpus cleaning pipeline
//!
//! Turns a raw corpus (JSON array or JSON-Lines) into a cleaned shard,
//! one `{"question", "answer"}` object per line.
//!
//! # Processing
//! 1. Records go through the [Extractor]. Records that do not have a known shape are skipped.
//! 1. Question and answer are normalized (see [crate::transformers]).
//! 1. Both have to be within token bounds, except for FAQ records that are always kept.
//! 1. Records whose normalized answer has already been written are dropped (first one wins).
//! 1. Remaining records are written in their original order.
//!
//! Content is written to a temporary file that replaces the destination once the whole corpus has been read,
//! so that a malformed corpus leaves no partial output behind.
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::Error;
use crate::extractors::Extractor;
use crate::filtering::{Filter, FilterMut, SeenAnswers, TokenLength};
use crate::io::reader::Corpus;
use crate::io::{JsonlWriter, WriterTrait};
use crate::pipelines::pipeline::Pipeline;
use crate::record::QaRecord;
use crate::transformers::Normalizer;

/// Counts of what happened to records during a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub read: usize,
    pub unknown_shape: usize,
    pub out_of_bounds: usize,
    pub duplicates: usize,
    pub written: usize,
}

pub struct QaClean {
    src: PathBuf,
    dst: PathBuf,
    length: TokenLength,
    extractor: Extractor,
    normalizer: Normalizer,
}

impl QaClean {
    /// Errors if `min_tokens > max_tokens`.
    pub fn new(
        src: PathBuf,
        dst: PathBuf,
        min_tokens: usize,
        max_tokens: usize,
    ) -> Result<Self, Error> {
        if min_tokens > max_tokens {
            return Err(Error::Config(format!(
                "min tokens ({}) is greater than max tokens ({})",
                min_tokens, max_tokens
            )));
        }

        Ok(Self {
            src,
            dst,
            length: TokenLength::new(min_tokens, max_tokens),
            extractor: Extractor::default(),
            normalizer: Normalizer::default(),
        })
    }

    /// Use a custom extractor, for corpora with other record shapes.
    pub fn with_extractor(mut self, extractor: Extractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Runs records from `corpus` through extraction, normalization, length filtering and deduplication,
    /// writing kept ones into `writer`.
    ///
    /// Answers are deduplicated for the duration of this call only.
    pub fn process<R, W>(&self, corpus: Corpus<R>, writer: &mut W) -> Result<CleanReport, Error>
    where
        R: BufRead,
        W: WriterTrait<Item = QaRecord>,
    {
        let mut seen = SeenAnswers::new();
        let mut report = CleanReport::default();

        for raw in corpus {
            let raw = raw?;
            report.read += 1;

            let extracted = match self.extractor.extract(&raw) {
                Some(e) => e,
                None => {
                    debug!("record #{}: unknown shape, skipping", report.read);
                    report.unknown_shape += 1;
                    continue;
                }
            };

            let is_faq = extracted.is_faq;
            let record = QaRecord::cleaned(extracted, &self.normalizer);

            if !is_faq && !self.length.detect(&record) {
                debug!("record #{}: out of token bounds", report.read);
                report.out_of_bounds += 1;
                continue;
            }

            if !seen.detect_mut(record.answer.as_str()) {
                debug!("record #{}: duplicate answer", report.read);
                report.duplicates += 1;
                continue;
            }

            writer.write_single(&record)?;
            report.written += 1;
        }

        writer.flush()?;
        Ok(report)
    }

    /// Path of the file that is written to before being moved to the destination.
    fn partial_path(&self) -> PathBuf {
        let mut name = self
            .dst
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".partial");
        self.dst.with_file_name(name)
    }

    fn run_into(&self, partial: &Path) -> Result<CleanReport, Error> {
        let corpus = Corpus::open(&self.src)?;
        info!(
            "cleaning {:?} ({:?} framing) into {:?}",
            self.src,
            corpus.framing(),
            self.dst
        );
        let mut writer = JsonlWriter::create(partial)?;
        let report = self.process(corpus, &mut writer)?;
        debug!("{} lines written to {:?}", writer.nb_lines(), writer.path());
        Ok(report)
    }
}

impl Pipeline<usize> for QaClean {
    fn run(&self) -> Result<usize, Error> {
        let partial = self.partial_path();
        let report = match self.run_into(&partial) {
            Ok(report) => report,
            Err(e) => {
                if partial.exists() {
                    if let Err(rm_err) = fs::remove_file(&partial) {
                        warn!("could not remove {:?}: {}", partial, rm_err);
                    }
                }
                return Err(e);
            }
        };

        fs::rename(&partial, &self.dst)?;

        info!(
            "read {} records: {} without question/answer, {} out of [{}, {}] tokens, {} duplicates, {} written",
            report.read,
            report.unknown_shape,
            report.out_of_bounds,
            self.length.min_tokens(),
            self.length.max_tokens(),
            report.duplicates,
            report.written
        );
        Ok(report.written)
    }
}

/// Clean the corpus at `src` into `dst`, returning the number of written records.
pub fn clean(src: &Path, dst: &Path, min_tokens: usize, max_tokens: usize) -> Result<usize, Error> {
    QaClean::new(src.to_path_buf(), dst.to_path_buf(), min_tokens, max_tokens)?.run()
}
