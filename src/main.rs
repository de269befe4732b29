//! Bounding-box record filter CLI - entry point and error reporting.

mod cli;
mod error;

use std::io::{self, BufWriter, Write};

use geosieve::filter::{self, FilterSummary};
use geosieve::input;

use crate::cli::Job;
use crate::error::{CliError, RunError};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    match cli::parse_cli(args) {
        Ok(job) => {
            // Performance monitoring setup
            let start = if job.perf {
                Some(std::time::Instant::now())
            } else {
                None
            };

            let summary = match run(&job) {
                Ok(summary) => summary,
                Err(err) => {
                    eprintln!("Error: {}", err);
                    std::process::exit(1);
                }
            };

            // Report performance if requested
            if let Some(start_time) = start {
                let elapsed = start_time.elapsed();
                eprintln!(
                    "Matched {} of {} records in {:.3}s ({:.0} records/sec)",
                    summary.matched,
                    summary.records,
                    elapsed.as_secs_f64(),
                    summary.records as f64 / elapsed.as_secs_f64()
                );
            }
        }
        Err(CliError::Exit(message)) => {
            println!("{}", message);
            std::process::exit(0);
        }
        Err(CliError::Message(message)) => {
            eprintln!("Error: {}", message);
            eprintln!();
            eprint!("{}", cli::get_help_text());
            std::process::exit(1);
        }
    }
}

fn run(job: &Job) -> Result<FilterSummary, RunError> {
    let mut reader = input::create_input_reader(&job.path)
        .map_err(|e| RunError::from(format!("Cannot open {}: {}", job.path, e)))?;

    let stdout = io::stdout().lock();
    let mut writer = BufWriter::new(stdout);

    match filter::filter_lines(&mut reader, &mut writer, &job.bbox) {
        Ok(summary) => {
            writer.flush()?;
            Ok(summary)
        }
        Err(err) => {
            // Lines matched before the failure stay emitted.
            let _ = writer.flush();
            Err(RunError::from(err.to_string()))
        }
    }
}
