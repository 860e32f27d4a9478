/*! Shard processing

Offline operations on already cleaned shards: merging and statistics.
!*/
pub mod merge;
pub mod stats;

pub use merge::merge;
pub use stats::{compute_stats, write_report, DatasetStats};
