/*! JSON-Lines writer.

Writes one serialized item per line. Non-ASCII characters are written as is.
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::error::Error;
use crate::io::create_parent_dir;

use super::WriterTrait;

pub struct JsonlWriter<T> {
    handle: BufWriter<File>,
    path: PathBuf,
    nb_lines: usize,
    item: PhantomData<T>,
}

impl<T> JsonlWriter<T> {
    /// Create (or truncate) the file at `dst`, creating its parent directory if needed.
    pub fn create(dst: &Path) -> Result<Self, Error> {
        create_parent_dir(dst)?;
        debug!("opening {:?} for writing", dst);
        let f = File::create(dst)?;
        Ok(Self {
            handle: BufWriter::new(f),
            path: dst.to_path_buf(),
            nb_lines: 0,
            item: PhantomData,
        })
    }

    /// Get a reference to the writer's path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines written so far.
    pub fn nb_lines(&self) -> usize {
        self.nb_lines
    }
}

impl<T: Serialize> WriterTrait for JsonlWriter<T> {
    type Item = T;

    fn write(&mut self, vals: Vec<T>) -> Result<(), Error> {
        for val in &vals {
            self.write_single(val)?;
        }
        Ok(())
    }

    fn write_single(&mut self, val: &T) -> Result<(), Error> {
        serde_json::to_writer(&mut self.handle, val)?;
        self.handle.write_all(b"\n")?;
        self.nb_lines += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        Ok(self.handle.flush()?)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::record::QaRecord;

    use super::*;

    #[test]
    fn write() {
        let dst = tempfile::tempdir().unwrap();
        let path = dst.path().join("nested/dir/out.jsonl");
        let mut wr = JsonlWriter::create(&path).unwrap();

        wr.write_single(&QaRecord::new("Ça va ?".to_string(), "Oui".to_string()))
            .unwrap();
        wr.write(vec![
            QaRecord::new("q1".to_string(), "a1".to_string()),
            QaRecord::new("q2".to_string(), "a2".to_string()),
        ])
        .unwrap();
        wr.flush().unwrap();
        assert_eq!(wr.nb_lines(), 3);
        assert_eq!(wr.path(), path.as_path());

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "{\"question\":\"Ça va ?\",\"answer\":\"Oui\"}\n\
             {\"question\":\"q1\",\"answer\":\"a1\"}\n\
             {\"question\":\"q2\",\"answer\":\"a2\"}\n"
        );
    }

    #[test]
    fn truncates() {
        let dst = tempfile::tempdir().unwrap();
        let path = dst.path().join("out.jsonl");
        fs::write(&path, "old content\nold content\n").unwrap();

        let mut wr: JsonlWriter<QaRecord> = JsonlWriter::create(&path).unwrap();
        wr.flush().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
