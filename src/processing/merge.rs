/*! Merging

Concatenates cleaned shards (`*.jsonl` files of a folder) into a single file.

Shards are merged in lexicographic path order, and lines are copied verbatim, without being parsed.
If the destination file lives in the source folder, it is not considered as a shard.
!*/
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use glob::Pattern;
use log::{debug, info, warn};

use crate::error::Error;
use crate::io::create_parent_dir;

/// Shard file extension.
pub const SHARD_EXTENSION: &str = "jsonl";

/// List shards of `src`, sorted.
pub fn shard_paths(src: &Path) -> Result<Vec<PathBuf>, Error> {
    let src = src
        .to_str()
        .ok_or_else(|| Error::Custom(format!("{:?} is not valid UTF-8", src)))?;
    let pattern = format!("{}/*.{}", Pattern::escape(src), SHARD_EXTENSION);
    debug!("looking for shards with pattern {}", pattern);

    let mut paths = glob::glob(&pattern)?.collect::<Result<Vec<PathBuf>, _>>()?;
    paths.retain(|p| p.is_file());
    paths.sort();
    Ok(paths)
}

/// Copy every line of the shard at `path` into `writer`,
/// adding a trailing newline to the last one if it lacks one.
///
/// Returns the number of copied lines.
fn merge_shard<W: Write>(path: &Path, writer: &mut W) -> Result<usize, Error> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut buf = Vec::new();
    let mut nb_lines = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() != Some(&b'\n') {
            buf.push(b'\n');
        }
        writer.write_all(&buf)?;
        nb_lines += 1;
    }

    debug!("{:?}: {} lines", path, nb_lines);
    Ok(nb_lines)
}

/// Merge all shards of `src` into `dst`, returning the total number of lines.
///
/// `dst` is truncated if it exists, and its parent folder is created if needed.
pub fn merge(src: &Path, dst: &Path) -> Result<usize, Error> {
    let dst_canonical = fs::canonicalize(dst).ok();
    let shards: Vec<PathBuf> = shard_paths(src)?
        .into_iter()
        .filter(|shard| {
            let is_dst = dst_canonical.is_some() && fs::canonicalize(shard).ok() == dst_canonical;
            if is_dst {
                warn!("skipping {:?}: it is the merge destination", shard);
            }
            !is_dst
        })
        .collect();

    info!("merging {} shards from {:?} into {:?}", shards.len(), src, dst);

    create_parent_dir(dst)?;
    let mut writer = BufWriter::new(File::create(dst)?);

    let mut total = 0;
    for shard in &shards {
        total += merge_shard(shard, &mut writer)?;
    }
    writer.flush()?;

    info!("merged {} lines into {:?}", total, dst);
    Ok(total)
}
