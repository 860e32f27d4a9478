/*! Corpus reader

Holds an [ArrayReader] or a [LineReader] depending on the detected [Framing],
and yields records in their original order for both.
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::debug;

use crate::{error::Error, record::RawRecord};

use super::{ArrayReader, Framing, LineReader};

#[derive(Debug)]
pub enum Corpus<R> {
    Array(ArrayReader),
    Lines(LineReader<R>),
}

impl<R: BufRead> Corpus<R> {
    /// Detect framing and build the matching reader.
    ///
    /// Array corpora are parsed right away, so syntax errors surface here.
    pub fn new(mut reader: R) -> Result<Self, Error> {
        let (framing, skipped_lines) = Framing::detect(&mut reader)?;
        debug!("corpus framing: {:?}", framing);
        match framing {
            Framing::Array => Ok(Self::Array(ArrayReader::new(reader)?)),
            Framing::Lines => Ok(Self::Lines(LineReader::with_offset(
                reader,
                skipped_lines,
            ))),
        }
    }

    pub fn framing(&self) -> Framing {
        match self {
            Self::Array(_) => Framing::Array,
            Self::Lines(_) => Framing::Lines,
        }
    }
}

impl Corpus<BufReader<File>> {
    /// Open a corpus file.
    pub fn open(src: &Path) -> Result<Self, Error> {
        let f = File::open(src)?;
        Self::new(BufReader::new(f))
    }
}

impl<R: BufRead> Iterator for Corpus<R> {
    type Item = Result<RawRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Array(r) => r.next(),
            Self::Lines(r) => r.next(),
        }
    }
}
