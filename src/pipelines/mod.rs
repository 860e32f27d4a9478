//! Pipelines.
//!
//! Various pipelines are implemented here, and the module
//! provides a light [pipeline::Pipeline] trait that enables easy and flexible pipeline creation.
pub mod qaclean;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use pipeline::Pipeline;
pub use qaclean::{clean, QaClean};
