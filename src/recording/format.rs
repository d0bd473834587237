// src/recording/format.rs
//! Plain-text serialization of the event log
//!
//! One line per event, fields in fixed order `name id parent cycle data`,
//! separated by single spaces with one trailing space before the newline.
//! No header, no footer, no escaping: a name containing whitespace will
//! misparse on re-read. Downstream pipeline-visualization tooling splits on
//! whitespace, so the trailing space is part of the contract.

use crate::recording::event::EventRecord;
use crate::utils::errors::{RecorderError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Number of whitespace-separated fields per line
const FIELDS_PER_LINE: usize = 5;

/// Render one record as its output line, including the line terminator
pub fn format_record(record: &EventRecord) -> String {
    format!(
        "{} {} {} {} {} \n",
        record.name, record.id, record.parent, record.cycle, record.data
    )
}

/// Parse one log line back into a record
///
/// Splits on whitespace, so the trailing space is tolerated. Only valid for
/// names without embedded spaces (documented limitation of the format).
pub fn parse_record(line: &str) -> Result<EventRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != FIELDS_PER_LINE {
        return Err(RecorderError::ParseFailed(format!(
            "expected {} fields, found {}: {:?}",
            FIELDS_PER_LINE,
            fields.len(),
            line
        )));
    }

    let parse_i64 = |field: &str, what: &str| {
        field.parse::<i64>().map_err(|e| {
            RecorderError::ParseFailed(format!("bad {} field {:?}: {}", what, field, e))
        })
    };

    Ok(EventRecord {
        name: fields[0].to_string(),
        id: parse_i64(fields[1], "id")?,
        parent: parse_i64(fields[2], "parent")?,
        cycle: parse_i64(fields[3], "cycle")?,
        data: parse_i64(fields[4], "data")?,
    })
}

/// Write all records to `path` in order, truncating any prior content
///
/// Returns the number of bytes written. A single synchronous, buffered write
/// pass; it runs to completion or fails outright.
pub fn write_log<P: AsRef<Path>>(path: P, records: &[EventRecord]) -> Result<usize> {
    let file = File::create(path.as_ref())
        .map_err(|e| RecorderError::WriteFailed(format!("open {:?}: {}", path.as_ref(), e)))?;
    let mut writer = BufWriter::new(file);

    let mut bytes = 0;
    for record in records {
        let line = format_record(record);
        writer
            .write_all(line.as_bytes())
            .map_err(|e| RecorderError::WriteFailed(format!("write: {}", e)))?;
        bytes += line.len();
    }

    writer
        .flush()
        .map_err(|e| RecorderError::WriteFailed(format!("flush: {}", e)))?;

    debug!(
        "Wrote {} events ({} bytes) to {:?}",
        records.len(),
        bytes,
        path.as_ref()
    );

    Ok(bytes)
}

/// Read a previously written log back into records, in file order
///
/// Blank lines are skipped; any malformed line is an error.
pub fn read_log<P: AsRef<Path>>(path: P) -> Result<Vec<EventRecord>> {
    let contents = std::fs::read_to_string(path.as_ref())
        .map_err(|e| RecorderError::ReadFailed(format!("read {:?}: {}", path.as_ref(), e)))?;

    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_record)
        .collect()
}
