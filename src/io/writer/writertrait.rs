use crate::error::Error;

pub trait WriterTrait {
    type Item;

    fn write(&mut self, vals: Vec<Self::Item>) -> Result<(), Error>;
    fn write_single(&mut self, val: &Self::Item) -> Result<(), Error>;
    /// Flushes buffered content. Has to be called once every write is done,
    /// since errors on drop are lost.
    fn flush(&mut self) -> Result<(), Error>;
}
