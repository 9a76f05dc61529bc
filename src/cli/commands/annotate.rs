//! `annotate` — the editable grid, as a CSV round-trip.
//!
//! `--grid out.csv` writes the snapshot for one date; the supervisor edits
//! the Categoria/Justificativa columns in any spreadsheet tool; `--apply
//! out.csv` diffs the edited file against a fresh snapshot and writes the
//! changes back to the store.

use crate::cli::commands::resolve_filtro;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::annotate::{AnnotateLogic, GridRow};
use crate::core::cache::DatasetCache;
use crate::core::report::aplicar_filtro;
use crate::core::session::Session;
use crate::core::sync::SyncLogic;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::category::Categoria;
use crate::ui::messages::{info, success, warning};
use crate::utils::currency::format_brl;
use crate::utils::date::{format_br, parse_date, today};
use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const GRID_HEADERS: [&str; 7] = [
    "id_registro",
    "Data",
    "Colaborador",
    "Cargo",
    "Valor Total (R$)",
    "Categoria",
    "Justificativa",
];

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Annotate {
        grid,
        apply,
        data,
        ano,
        mes,
        filial,
        force,
    } = cmd
    {
        let dia = match data {
            Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => today(),
        };

        let dataset = SyncLogic::load_or_build(cfg, false)?;
        if dataset.is_empty() {
            warning("Não há dados válidos para exibir.");
            return Ok(());
        }

        let filtro = resolve_filtro(cfg, ano, mes, filial)?;
        let mut rows = aplicar_filtro(&dataset.registros, &filtro);
        rows.retain(|r| r.data == dia);

        let snapshot = AnnotateLogic::snapshot(&rows);

        if let Some(out) = grid {
            if snapshot.is_empty() {
                warning(format!(
                    "Nenhum registro encontrado para a data {} com os filtros selecionados.",
                    format_br(dia)
                ));
                return Ok(());
            }
            write_grid(out, &snapshot, *force)?;
            info(format!(
                "Categorias válidas: {}",
                Categoria::all_labels().join(", ")
            ));
            return Ok(());
        }

        if let Some(edited_file) = apply {
            apply_grid(cfg, edited_file, &snapshot)?;
            return Ok(());
        }

        // sem flag → mostra o snapshot no terminal
        for row in &snapshot {
            println!(
                "{}  {}  {}  {}  [{}] {}",
                row.id_registro,
                format_br(row.data),
                row.cargo,
                format_brl(row.valor_total),
                row.categoria,
                row.justificativa
            );
        }
        println!("{} registro(s). Use --grid <file> para editar.", snapshot.len());
    }
    Ok(())
}

/// Grid CSV no mesmo dialeto dos exports (BOM + ponto e vírgula).
fn write_grid(out: &str, snapshot: &[GridRow], force: bool) -> AppResult<()> {
    let path = Path::new(out);
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "'{}' already exists (use --force to overwrite)",
            out
        )));
    }

    let mut file = File::create(path)?;
    file.write_all(b"\xEF\xBB\xBF")?;

    let mut wtr = csv::WriterBuilder::new().delimiter(b';').from_writer(file);
    wtr.write_record(GRID_HEADERS)?;
    for row in snapshot {
        wtr.write_record([
            row.id_registro.as_str(),
            &format_br(row.data),
            &row.nome,
            &row.cargo,
            &format_brl(row.valor_total),
            &row.categoria,
            &row.justificativa,
        ])?;
    }
    wtr.flush()?;

    success(format!("Grid written: {} ({} rows)", out, snapshot.len()));
    Ok(())
}

/// Read the edited grid back. Only id_registro, Categoria and
/// Justificativa matter — the context columns are free to be mangled by
/// whatever spreadsheet tool edited the file.
fn read_grid(path: &str, snapshot: &[GridRow]) -> AppResult<Vec<GridRow>> {
    let originais: HashMap<&str, &GridRow> = snapshot
        .iter()
        .map(|row| (row.id_registro.as_str(), row))
        .collect();

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let idx = |name: &str| -> Option<usize> {
        headers
            .iter()
            .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
    };

    let c_id = idx("id_registro")
        .ok_or_else(|| AppError::Other("grid file is missing the id_registro column".into()))?;
    let c_cat = idx("Categoria")
        .ok_or_else(|| AppError::Other("grid file is missing the Categoria column".into()))?;
    let c_just = idx("Justificativa")
        .ok_or_else(|| AppError::Other("grid file is missing the Justificativa column".into()))?;

    let mut out = Vec::new();
    for record in reader.records() {
        let record = record?;
        let id = record.get(c_id).unwrap_or("").trim().to_string();
        if id.is_empty() {
            continue;
        }

        let original = originais
            .get(id.as_str())
            .ok_or_else(|| AppError::UnknownRecord(id.clone()))?;

        let mut row = (*original).clone();
        row.categoria = record.get(c_cat).unwrap_or("").trim().to_string();
        row.justificativa = record.get(c_just).unwrap_or("").trim().to_string();
        out.push(row);
    }

    Ok(out)
}

fn apply_grid(cfg: &Config, edited_file: &str, snapshot: &[GridRow]) -> AppResult<()> {
    let editado = read_grid(edited_file, snapshot)?;
    let changes = AnnotateLogic::plan_changes(snapshot, &editado)?;

    if changes.is_empty() {
        info("Nenhuma alteração nas anotações foi detectada.");
        return Ok(());
    }

    let session = Session::load();
    let autor = session.autor();

    let mut pool = DbPool::new(&cfg.database)?;
    let (upserted, deleted) = AnnotateLogic::aplicar(&mut pool, &changes, &autor)?;

    let mut msg = Vec::new();
    if upserted > 0 {
        msg.push(format!("{} anotações salvas/atualizadas", upserted));
    }
    if deleted > 0 {
        msg.push(format!("{} anotações removidas", deleted));
    }
    success(format!("{}!", msg.join(" e ")));

    oplog(
        &pool.conn,
        "annotate",
        &autor,
        &format!("{} upserted, {} deleted", upserted, deleted),
    )?;

    // snapshot invalidado: o próximo comando recarrega com as anotações novas
    DatasetCache::new(cfg.cache_path(), cfg.cache_ttl_secs).invalidate()?;

    Ok(())
}
