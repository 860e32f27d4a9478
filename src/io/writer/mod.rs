/*!
# Writing
Writers serialize items to files. Files are always truncated on creation, never appended to.
!*/
mod jsonl;
mod writertrait;

pub use jsonl::JsonlWriter;
pub use writertrait::WriterTrait;
