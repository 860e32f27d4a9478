/*! Reading facilities

Readers implement [Iterator] over raw records.

There are two kinds of readers:

- [ArrayReader] : Parses a whole JSON array in memory.
- [LineReader] : Streams JSON-Lines, one record per non-blank line.

Both drop undecodable fragments before parsing (see [super::decode]).
!*/
use std::io::BufRead;

use log::{debug, warn};

use crate::{error::Error, record::RawRecord};

use super::decode::decode;

/// Reader over a fully materialized JSON array.
#[derive(Debug)]
pub struct ArrayReader {
    records: std::vec::IntoIter<RawRecord>,
}

impl ArrayReader {
    /// Reads and parses the whole array.
    ///
    /// Errors if the content is not a valid JSON array.
    pub fn new<R: BufRead>(mut reader: R) -> Result<Self, Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let (content, dropped) = decode(&bytes);
        if dropped > 0 {
            warn!("dropped {} undecodable fragments in corpus", dropped);
        }
        let records: Vec<RawRecord> = serde_json::from_str(&content)?;
        debug!("parsed {} records", records.len());
        Ok(Self {
            records: records.into_iter(),
        })
    }
}

impl Iterator for ArrayReader {
    type Item = Result<RawRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next().map(Ok)
    }
}

/// Reader that yields a record for each non-blank line.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    line: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_offset(reader, 0)
    }

    /// Create a reader whose first line is `offset + 1`,
    /// for streams that already have been partially consumed.
    pub fn with_offset(reader: R, offset: usize) -> Self {
        Self {
            reader,
            line: offset,
            buf: Vec::new(),
        }
    }

    /// Number of the last read line (1-based).
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<RawRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => self.line += 1,
                Err(e) => return Some(Err(Error::Io(e))),
            }

            let (line, dropped) = decode(&self.buf);
            if dropped > 0 {
                warn!("dropped {} undecodable fragments on line {}", dropped, self.line);
            }
            if line.trim().is_empty() {
                continue;
            }

            return Some(
                serde_json::from_str(&line).map_err(|source| Error::MalformedRecord {
                    line: self.line,
                    source,
                }),
            );
        }
    }
}
