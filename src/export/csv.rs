// src/export/csv.rs

use crate::errors::AppResult;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write a semicolon-delimited CSV with a UTF-8 signature (BOM).
///
/// The BOM + ";" combination is what makes the file open correctly in the
/// pt-BR Excel installs the HR team uses.
pub(crate) fn write_csv(path: &Path, headers: &[&str], rows: &[Vec<String>]) -> AppResult<()> {
    let mut file = File::create(path)?;
    file.write_all(b"\xEF\xBB\xBF")?;

    let mut wtr = csv::WriterBuilder::new().delimiter(b';').from_writer(file);

    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}
