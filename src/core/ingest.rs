//! Workbook ingestion: reads the per-branch overtime tabs plus the two
//! reference tabs (OPERACAO, QUADRO) into header-driven raw tables.
//!
//! Failure policy mirrors the dashboard this replaces: a missing tab is a
//! user-visible warning and an empty table, so the caller can still render
//! whatever did load; a workbook that cannot be opened at all is a hard
//! error and nothing renders.

use crate::errors::{AppError, AppResult};
use crate::utils::date::excel_serial_to_date;
use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use std::path::Path;

/// A worksheet read as strings: first row = headers, the rest = records.
/// Typing happens later, in the schema normalizer.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell by row index + header index ("" when the row is ragged).
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Everything the workbook contributes to one sync.
#[derive(Debug, Default)]
pub struct WorkbookData {
    /// (branch code, raw tab) — only tabs that yielded at least one row.
    pub filiais: Vec<(String, RawTable)>,
    pub operacao: RawTable,
    pub quadro: RawTable,
    pub warnings: Vec<String>,
}

pub struct IngestLogic;

impl IngestLogic {
    /// Read all configured tabs from the workbook at `path`.
    pub fn load(
        path: &Path,
        abas_filiais: &[String],
        aba_operacao: &str,
        aba_quadro: &str,
    ) -> AppResult<WorkbookData> {
        let mut workbook: Xlsx<_> = open_workbook(path)
            .map_err(|e| AppError::Workbook(format!("{}: {}", path.display(), e)))?;

        let mut data = WorkbookData::default();

        // 1️⃣ abas de filial
        for aba in abas_filiais {
            match workbook.worksheet_range(aba) {
                Ok(range) => {
                    let table = read_table(&range);
                    if table.is_empty() {
                        continue; // aba sem registros → pulada
                    }
                    data.filiais.push((aba.clone(), table));
                }
                Err(_) => {
                    data.warnings
                        .push(format!("Aba '{}' não encontrada na planilha.", aba));
                }
            }
        }

        // 2️⃣ abas de referência
        data.operacao = read_reference_tab(&mut workbook, aba_operacao, &mut data.warnings);
        data.quadro = read_reference_tab(&mut workbook, aba_quadro, &mut data.warnings);

        Ok(data)
    }
}

fn read_reference_tab(
    workbook: &mut Xlsx<std::io::BufReader<std::fs::File>>,
    name: &str,
    warnings: &mut Vec<String>,
) -> RawTable {
    match workbook.worksheet_range(name) {
        Ok(range) => read_table(&range),
        Err(_) => {
            warnings.push(format!("Aba '{}' não encontrada na planilha.", name));
            RawTable::default()
        }
    }
}

/// First row = header, remaining rows = records. Rows made only of empty
/// cells are dropped.
fn read_table(range: &Range<Data>) -> RawTable {
    let mut rows_iter = range.rows();

    let headers: Vec<String> = match rows_iter.next() {
        Some(header) => header.iter().map(|c| cell_to_string(c).trim().to_string()).collect(),
        None => return RawTable::default(),
    };

    let mut rows = Vec::new();
    for row in rows_iter {
        let cells: Vec<String> = row.iter().map(cell_to_string).collect();
        if cells.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        rows.push(cells);
    }

    RawTable { headers, rows }
}

/// Render a calamine cell the way the old `get_all_records` call did:
/// everything becomes text, typing is the normalizer's job.
///
/// Date-typed cells become day-first date strings; time-typed cells (an
/// Excel serial below 1.0) become "HH:MM:SS" so the duration parser can
/// take them.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(n) => n.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("#ERR({:?})", e),
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            if serial < 1.0 {
                let secs = (serial * 86400.0).round() as i64;
                format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
            } else {
                match excel_serial_to_date(serial) {
                    Some(d) => d.format("%d/%m/%Y").to_string(),
                    None => serial.to_string(),
                }
            }
        }
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}
