//! Roster CSV reader.
//!
//! Columns are positional: `[0]` unused, `[1]` hire date, `[2]` title,
//! `[3]` person, `[4]` supervisor. The header row is kept here and dropped
//! later by the header sentinel.
use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::types::Row;

/// Read every record from `reader`; any short record fails the whole read.
///
/// Fields that are not valid UTF-8 (Windows-1252 exports) are decoded lossily;
/// person keys only keep ASCII letters, so they are unaffected.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<Row>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (i, record) in csv_reader.byte_records().enumerate() {
        let record = record?;
        let fields: Vec<Cow<'_, str>> = record.iter().map(String::from_utf8_lossy).collect();
        if fields.iter().any(|f| matches!(f, Cow::Owned(_))) {
            warn!("Record {} is not valid UTF-8; undecodable bytes replaced", i + 1);
        }
        rows.push(Row::from_fields(i + 1, &fields)?);
    }
    Ok(rows)
}

/// Open and read a roster file.
pub fn read_roster(path: &Path) -> Result<Vec<Row>> {
    if !path.exists() {
        return Err(Error::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    let rows = read_rows(file)?;
    info!("Read {} roster records from {:?}", rows.len(), path);
    Ok(rows)
}
