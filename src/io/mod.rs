/*!
# IO utilities

Corpus loading and shard writing.
!*/
pub mod reader;
pub mod writer;

use std::path::Path;

use log::debug;

use crate::error::Error;

pub use reader::Corpus;
pub use writer::{JsonlWriter, WriterTrait};

/// Create the parent directory of `path` (and its ancestors) if it does not exist.
pub fn create_parent_dir(path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            debug!("creating directory {:?}", parent);
        }
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
