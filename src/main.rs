//! # qaprep
//!
//! Cleaning, merging and statistics for question-answering fine-tuning corpora.
//!
//! ## Getting started
//!
//! ```sh
//! qaprep 0.1.0
//! question-answering corpus preparation tool.
//!
//! USAGE:
//!     qaprep <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     clean    Clean a raw QA corpus into a JSONL shard
//!     help     Prints this message or the help of the given subcommand(s)
//!     merge    Merge cleaned JSONL shards into a combined dataset
//!     stats    Compute statistics of a cleaned dataset
//! ```
//!
//! Set `RUST_LOG=info` (or `debug`) to get details about each run.
use structopt::StructOpt;

use qaprep::error::Error;
use qaprep::pipelines::{Pipeline, QaClean};
use qaprep::processing;

#[macro_use]
extern crate log;

mod cli;

fn main() {
    env_logger::init();

    let opt = cli::QaPrep::from_args();
    debug!("cli args\n{:#?}", opt);

    if let Err(e) = run(opt) {
        error!("{:?}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(opt: cli::QaPrep) -> Result<(), Error> {
    match opt {
        cli::QaPrep::Clean(c) => {
            let p = QaClean::new(c.input, c.output.clone(), c.min_tokens, c.max_tokens)?;
            let total = p.run()?;
            println!("Saved {} cleaned records to {}", total, c.output.display());
        }

        cli::QaPrep::Merge(m) => {
            let total = processing::merge(&m.input_dir, &m.output)?;
            println!("Merged {} records into {}", total, m.output.display());
        }

        cli::QaPrep::Stats(s) => {
            let stats = processing::compute_stats(&s.input)?;
            processing::write_report(&stats, &s.output)?;
            info!("{:?}", stats);
            println!("Wrote stats to {}", s.output.display());
        }
    };
    Ok(())
}
