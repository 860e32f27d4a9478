/*! # qaprep

Preparation of question-answering corpora for fine-tuning.

- [pipelines::QaClean] cleans a raw corpus into a shard,
- [processing::merge] concatenates shards,
- [processing::compute_stats] computes statistics on the merged corpus.
!*/
pub mod error;
pub mod extractors;
pub mod filtering;
pub mod io;
pub mod pipelines;
pub mod processing;
pub mod record;
pub mod transformers;
