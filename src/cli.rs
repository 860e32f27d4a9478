//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "qaprep", about = "question-answering corpus preparation tool.")]
/// Holds every command that is callable by the `qaprep` command.
pub enum QaPrep {
    #[structopt(about = "Clean a raw QA corpus into a JSONL shard")]
    Clean(Clean),
    #[structopt(about = "Merge cleaned JSONL shards into a combined dataset")]
    Merge(Merge),
    #[structopt(about = "Compute statistics of a cleaned dataset")]
    Stats(Stats),
}

#[derive(Debug, StructOpt)]
/// Clean command and parameters.
///
/// ```sh
/// qaprep-clean 0.1.0
/// Clean a raw QA corpus into a JSONL shard
///
/// USAGE:
///     qaprep clean [OPTIONS] --input <input> --output <output>
///
/// OPTIONS:
///         --input <input>              Input JSON or JSONL file path
///         --max-tokens <max-tokens>    Maximum token count per QA [default: 512]
///         --min-tokens <min-tokens>    Minimum token count per QA [default: 10]
///         --output <output>            Output JSONL file path
/// ```
pub struct Clean {
    #[structopt(parse(from_os_str), long, help = "Input JSON or JSONL file path")]
    pub input: PathBuf,
    #[structopt(parse(from_os_str), long, help = "Output JSONL file path")]
    pub output: PathBuf,
    #[structopt(long, default_value = "10", help = "Minimum token count per QA")]
    pub min_tokens: usize,
    #[structopt(long, default_value = "512", help = "Maximum token count per QA")]
    pub max_tokens: usize,
}

#[derive(Debug, StructOpt)]
/// Merge command and parameters.
pub struct Merge {
    #[structopt(
        parse(from_os_str),
        long,
        default_value = "data/clean",
        help = "Directory of cleaned JSONL files"
    )]
    pub input_dir: PathBuf,
    #[structopt(
        parse(from_os_str),
        long,
        default_value = "data/clean/combined.jsonl",
        help = "Output combined JSONL path"
    )]
    pub output: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Stats command and parameters.
pub struct Stats {
    #[structopt(
        parse(from_os_str),
        long,
        default_value = "data/clean/combined.jsonl",
        help = "Input combined JSONL file"
    )]
    pub input: PathBuf,
    #[structopt(
        parse(from_os_str),
        long,
        default_value = "data/processed/stats.md",
        help = "Output markdown file for stats"
    )]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_defaults() {
        let opt = QaPrep::from_iter(&["qaprep", "clean", "--input", "in.json", "--output", "out.jsonl"]);
        match opt {
            QaPrep::Clean(c) => {
                assert_eq!(c.input, PathBuf::from("in.json"));
                assert_eq!(c.output, PathBuf::from("out.jsonl"));
                assert_eq!(c.min_tokens, 10);
                assert_eq!(c.max_tokens, 512);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn clean_requires_paths() {
        assert!(QaPrep::from_iter_safe(&["qaprep", "clean", "--input", "in.json"]).is_err());
    }

    #[test]
    fn merge_defaults() {
        match QaPrep::from_iter(&["qaprep", "merge"]) {
            QaPrep::Merge(m) => {
                assert_eq!(m.input_dir, PathBuf::from("data/clean"));
                assert_eq!(m.output, PathBuf::from("data/clean/combined.jsonl"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn stats_overrides() {
        match QaPrep::from_iter(&["qaprep", "stats", "--input", "c.jsonl", "--output", "s.md"]) {
            QaPrep::Stats(s) => {
                assert_eq!(s.input, PathBuf::from("c.jsonl"));
                assert_eq!(s.output, PathBuf::from("s.md"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
