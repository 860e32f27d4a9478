//! Corpus framing detection.
use std::io::{self, BufRead};

const BOM: &[u8] = b"\xEF\xBB\xBF";

/// How records are laid out in a corpus file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// A single JSON array of records.
    Array,
    /// One JSON record per line.
    Lines,
}

impl Framing {
    /// Detect framing by peeking at the first non-whitespace byte:
    /// `[` means [Framing::Array], anything else (including an empty stream) [Framing::Lines].
    ///
    /// A leading UTF-8 BOM and leading whitespace are consumed from `reader`.
    /// Returns the framing and the number of newlines consumed,
    /// so that line numbers can be kept accurate.
    pub fn detect<R: BufRead>(reader: &mut R) -> io::Result<(Framing, usize)> {
        let mut newlines = 0;
        let mut at_start = true;
        loop {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                return Ok((Framing::Lines, newlines));
            }

            if at_start {
                at_start = false;
                if buf.starts_with(BOM) {
                    reader.consume(BOM.len());
                    continue;
                }
            }

            let whitespace = buf
                .iter()
                .take_while(|b| b.is_ascii_whitespace())
                .inspect(|b| {
                    if **b == b'\n' {
                        newlines += 1
                    }
                })
                .count();

            let first = buf.get(whitespace).copied();
            reader.consume(whitespace);

            match first {
                Some(b'[') => return Ok((Framing::Array, newlines)),
                Some(_) => return Ok((Framing::Lines, newlines)),
                // buffer was only whitespace, refill
                None => continue,
            }
        }
    }
}
