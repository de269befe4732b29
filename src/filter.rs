//! Streaming record filter: decode each line, test it, pass it through.

use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::bbox::BoundingBox;
use crate::record::Business;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid record at line {line} ({:?}): {source}", snippet(.text))]
    Decode {
        line: u64,
        text: String,
        source: serde_json::Error,
    },
    #[error("Read failed: {0}")]
    Read(io::Error),
    #[error("Write failed: {0}")]
    Write(io::Error),
}

/// Bounded copy of an offending line for error messages. Dataset records run
/// to several kilobytes; the full text stays on the error value.
fn snippet(text: &str) -> String {
    const LIMIT: usize = 120;
    let short: String = text.chars().take(LIMIT).collect();
    if short.len() < text.len() {
        format!("{short}...")
    } else {
        short
    }
}

/// Counters for one filter pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    pub records: u64,
    pub matched: u64,
}

/// Streams `reader` through `bbox`, writing matching lines to `writer`.
///
/// Matching lines go out exactly as they came in, minus the line ending;
/// nothing is re-encoded. The first line that fails to decode ends the
/// pass, leaving everything already written in place.
pub fn filter_lines<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    bbox: &BoundingBox,
) -> Result<FilterSummary, FilterError> {
    let mut line = Vec::new();
    let mut summary = FilterSummary::default();

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(FilterError::Read)?;
        if read == 0 {
            break;
        }
        summary.records += 1;

        let record_bytes = trim_line_ending(&line);
        let record: Business =
            serde_json::from_slice(record_bytes).map_err(|source| FilterError::Decode {
                line: summary.records,
                text: String::from_utf8_lossy(record_bytes).into_owned(),
                source,
            })?;

        if bbox.contains(record.latitude, record.longitude) {
            writer.write_all(record_bytes).map_err(FilterError::Write)?;
            writer.write_all(b"\n").map_err(FilterError::Write)?;
            summary.matched += 1;
        }
    }

    Ok(summary)
}

/// Strips one trailing `\n` and, if present before it, one `\r`.
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
