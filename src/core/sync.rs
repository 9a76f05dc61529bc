//! The full load pipeline: ingest → normalize → reconcile → cache.
//!
//! The annotation store is optional at read time: if it cannot be opened,
//! annotations and pending hires degrade to empty and the overtime view
//! still renders. The workbook is not optional — without it there is no
//! dashboard.

use crate::config::Config;
use crate::core::cache::DatasetCache;
use crate::core::ingest::IngestLogic;
use crate::core::reconcile::ReconcileLogic;
use crate::core::schema;
use crate::db::pool::DbPool;
use crate::db::queries::{fetch_anotacoes, fetch_pending_hires};
use crate::errors::AppResult;
use crate::models::annotation::Anotacao;
use crate::models::pending::PendingHires;
use crate::models::record::OvertimeRecord;
use crate::models::roster::RosterEntry;
use crate::ui::messages::warning;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One fully reconciled load, as cached between commands.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub loaded_at: String, // ISO8601
    pub registros: Vec<OvertimeRecord>,
    pub quadro: Vec<RosterEntry>,
    pub pendentes: Vec<PendingHires>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.registros.is_empty()
    }

    /// Newest record date — shown as "Atualizado até dd/mm" in the report
    /// header.
    pub fn ultima_atualizacao(&self) -> Option<NaiveDate> {
        self.registros.iter().map(|r| r.data).max()
    }
}

pub struct SyncLogic;

impl SyncLogic {
    /// Run the whole pipeline against the configured workbook and store.
    pub fn build_dataset(cfg: &Config) -> AppResult<Dataset> {
        //
        // 1️⃣ PLANILHA
        //
        let workbook = IngestLogic::load(
            &cfg.workbook_path(),
            &cfg.abas_filiais,
            &cfg.aba_operacao,
            &cfg.aba_quadro,
        )?;

        for w in &workbook.warnings {
            warning(w);
        }

        if workbook.filiais.is_empty() {
            warning("Nenhuma aba de filial com dados foi encontrada.");
            return Ok(Dataset {
                loaded_at: Local::now().to_rfc3339(),
                ..Dataset::default()
            });
        }

        //
        // 2️⃣ NORMALIZAÇÃO
        //
        let mut horas = Vec::new();
        for (filial, table) in &workbook.filiais {
            horas.extend(schema::parse_horas(table, filial));
        }

        let operacao = schema::parse_operacao(&workbook.operacao);
        let quadro = schema::parse_quadro(&workbook.quadro);

        //
        // 3️⃣ ANOTAÇÕES + CONTRATAÇÕES (degradam para vazio em caso de erro)
        //
        let (anotacoes, pendentes) = match DbPool::new(&cfg.database) {
            Ok(mut pool) => {
                let anotacoes = match fetch_anotacoes(&mut pool) {
                    Ok(list) => list,
                    Err(e) => {
                        warning(format!("Erro ao buscar anotações: {}", e));
                        Vec::new()
                    }
                };
                let pendentes = match fetch_pending_hires(&mut pool) {
                    Ok(list) => list,
                    Err(e) => {
                        warning(format!("Erro ao buscar contratações pendentes: {}", e));
                        Vec::new()
                    }
                };
                (anotacoes, pendentes)
            }
            Err(e) => {
                warning(format!("Conexão com o banco de dados falhou: {}", e));
                (Vec::new(), Vec::new())
            }
        };

        let anotacoes_map: HashMap<String, Anotacao> = anotacoes
            .into_iter()
            .map(|a| (a.id_registro.clone(), a))
            .collect();

        //
        // 4️⃣ RECONCILIAÇÃO
        //
        let mut join_warnings = Vec::new();
        let cargos = ReconcileLogic::build_cargo_map(&operacao, &mut join_warnings);
        for w in &join_warnings {
            warning(w);
        }

        let registros = ReconcileLogic::reconcile(horas, &cargos, &anotacoes_map);

        Ok(Dataset {
            loaded_at: Local::now().to_rfc3339(),
            registros,
            quadro,
            pendentes,
        })
    }

    /// Cache-aware load: serve the snapshot while it is fresh, otherwise
    /// rebuild and re-cache. `force` clears the snapshot first.
    pub fn load_or_build(cfg: &Config, force: bool) -> AppResult<Dataset> {
        let cache = DatasetCache::new(cfg.cache_path(), cfg.cache_ttl_secs);

        if force {
            cache.invalidate()?;
        } else if let Some(ds) = cache.load() {
            return Ok(ds);
        }

        let dataset = Self::build_dataset(cfg)?;
        cache.store(&dataset)?;
        Ok(dataset)
    }
}
