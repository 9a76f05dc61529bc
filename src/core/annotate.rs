//! Annotation grid: snapshot, diff and write-back planning.
//!
//! The grid round-trips through a CSV file: `annotate --grid` writes the
//! snapshot, the supervisor edits the category/justification columns, and
//! `annotate --apply` diffs the edited file against a fresh snapshot.
//! Diffing is keyed by id_registro, never by row order — the supervisor is
//! free to sort or delete rows in the editor.

use crate::db::pool::DbPool;
use crate::db::queries::{delete_anotacao, upsert_anotacao};
use crate::errors::{AppError, AppResult};
use crate::models::category::Categoria;
use crate::models::record::OvertimeRecord;
use chrono::NaiveDate;
use std::collections::HashMap;

/// One editable grid line. Everything except categoria/justificativa is
/// read-only context for the person editing.
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub id_registro: String,
    pub data: NaiveDate,
    pub nome: String,
    pub cargo: String,
    pub valor_total: f64,
    pub categoria: String,
    pub justificativa: String,
}

/// What the diff decided to write.
#[derive(Debug, Default, PartialEq)]
pub struct ChangeSet {
    pub upserts: Vec<GridRow>,
    pub deletes: Vec<String>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.upserts.is_empty() && self.deletes.is_empty()
    }
}

pub struct AnnotateLogic;

impl AnnotateLogic {
    /// Grid snapshot for a set of filtered records. Rows with zero total
    /// value carry nothing to justify and are left out.
    pub fn snapshot(registros: &[&OvertimeRecord]) -> Vec<GridRow> {
        registros
            .iter()
            .filter(|r| r.valor_total > 0.0)
            .map(|r| GridRow {
                id_registro: r.id_registro.clone(),
                data: r.data,
                nome: r.nome.clone(),
                cargo: r.cargo.clone(),
                valor_total: r.valor_total,
                categoria: r.categoria.clone(),
                justificativa: r.justificativa.clone(),
            })
            .collect()
    }

    /// Diff the edited grid against the snapshot.
    ///
    /// Rules, validated BEFORE anything touches the store:
    /// - unchanged rows are ignored;
    /// - both fields blank → delete (only if the snapshot had content);
    /// - a category outside the enumerated list → validation error;
    /// - a category without a justification → validation error;
    /// - anything else → upsert.
    ///
    /// Any validation failure rejects the whole save with zero store
    /// calls, listing every offending row.
    pub fn plan_changes(snapshot: &[GridRow], editado: &[GridRow]) -> AppResult<ChangeSet> {
        let originais: HashMap<&str, &GridRow> = snapshot
            .iter()
            .map(|row| (row.id_registro.as_str(), row))
            .collect();

        let mut changes = ChangeSet::default();
        let mut invalidos: Vec<String> = Vec::new();

        for row in editado {
            let original = match originais.get(row.id_registro.as_str()) {
                Some(o) => *o,
                None => return Err(AppError::UnknownRecord(row.id_registro.clone())),
            };

            let categoria = row.categoria.trim();
            let justificativa = row.justificativa.trim();

            let sem_mudanca = categoria == original.categoria.trim()
                && justificativa == original.justificativa.trim();
            if sem_mudanca {
                continue;
            }

            if categoria.is_empty() && justificativa.is_empty() {
                changes.deletes.push(row.id_registro.clone());
                continue;
            }

            if !categoria.is_empty() && Categoria::from_label(categoria).is_none() {
                invalidos.push(format!(
                    "{}: categoria desconhecida '{}' (use: {})",
                    row.id_registro,
                    categoria,
                    Categoria::all_labels().join(", ")
                ));
                continue;
            }

            if !categoria.is_empty() && justificativa.is_empty() {
                invalidos.push(format!(
                    "{}: categoria '{}' exige uma justificativa",
                    row.id_registro, categoria
                ));
                continue;
            }

            let mut upsert = row.clone();
            upsert.categoria = categoria.to_string();
            upsert.justificativa = justificativa.to_string();
            changes.upserts.push(upsert);
        }

        if !invalidos.is_empty() {
            return Err(AppError::AnnotationValidation(invalidos.join("\n")));
        }

        Ok(changes)
    }

    /// Write a planned change set. Returns (upserted, deleted).
    pub fn aplicar(
        pool: &mut DbPool,
        changes: &ChangeSet,
        autor: &str,
    ) -> AppResult<(usize, usize)> {
        let tx = pool.conn.transaction()?;

        for id in &changes.deletes {
            delete_anotacao(&tx, id)?;
        }
        for row in &changes.upserts {
            upsert_anotacao(&tx, &row.id_registro, autor, &row.categoria, &row.justificativa)?;
        }

        tx.commit()?;
        Ok((changes.upserts.len(), changes.deletes.len()))
    }
}
