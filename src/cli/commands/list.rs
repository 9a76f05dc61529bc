use crate::cli::commands::resolve_filtro;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::aplicar_filtro;
use crate::core::sync::SyncLogic;
use crate::errors::{AppError, AppResult};
use crate::models::record::OvertimeRecord;
use crate::ui::messages::{info, warning};
use crate::utils::currency::format_brl;
use crate::utils::date::{format_br, parse_date, today};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        data,
        periodo_inteiro,
        ano,
        mes,
        filial,
    } = cmd
    {
        let dataset = SyncLogic::load_or_build(cfg, false)?;
        if dataset.is_empty() {
            warning("Não há dados válidos para exibir.");
            return Ok(());
        }

        let filtro = resolve_filtro(cfg, ano, mes, filial)?;
        let mut rows = aplicar_filtro(&dataset.registros, &filtro);

        // tabela de anotações: um dia por vez, a menos que --periodo-inteiro
        if !*periodo_inteiro {
            let dia = match data {
                Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
                None => today(),
            };
            rows.retain(|r| r.data == dia);

            if rows.is_empty() {
                warning(format!(
                    "Nenhum registro encontrado para a data {} com os filtros selecionados.",
                    format_br(dia)
                ));
                return Ok(());
            }
        }

        // último lançamento com valor no recorte atual
        if let Some(ultimo) = rows
            .iter()
            .filter(|r| r.valor_total > 0.0)
            .map(|r| r.data)
            .max()
        {
            info(format!("Último registro com valor: {}", format_br(ultimo)));
        }

        print_registros(&rows);
    }
    Ok(())
}

fn print_registros(rows: &[&OvertimeRecord]) {
    let mut table = Table::new(vec![
        Column::new("Data"),
        Column::new("Colaborador"),
        Column::new("Cargo"),
        Column::new("Filial"),
        Column::new("Valor Total (R$)"),
        Column::new("Categoria"),
        Column::wrapped("Justificativa", 40),
        Column::new("Usuario Responsavel"),
    ]);

    for r in rows {
        table.add_row(vec![
            format_br(r.data),
            r.nome.clone(),
            r.cargo.clone(),
            r.filial.clone(),
            format_brl(r.valor_total),
            r.categoria.clone(),
            r.justificativa.clone(),
            r.anotado_por.clone(),
        ]);
    }

    println!("{}", table.render());
    println!("{} registro(s).", rows.len());
}
