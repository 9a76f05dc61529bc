use crate::cli::commands::resolve_filtro;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{Filtro, ReportLogic, filial_display};
use crate::core::sync::{Dataset, SyncLogic};
use crate::errors::AppResult;
use crate::ui::messages::{banner, header, info, metric, warning};
use crate::utils::currency::format_brl;
use crate::utils::date::{format_br, janela_comercial, mes_nome};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        ano,
        mes,
        filial,
        nao_classificados,
    } = cmd
    {
        let dataset = SyncLogic::load_or_build(cfg, false)?;
        if dataset.is_empty() {
            warning("Não há dados válidos para exibir.");
            return Ok(());
        }

        let filtro = resolve_filtro(cfg, ano, mes, filial)?;
        let rows = crate::core::report::aplicar_filtro(&dataset.registros, &filtro);

        print_periodo(&filtro);

        if rows.is_empty() {
            warning("Nenhum dado encontrado para os filtros selecionados.");
            return Ok(());
        }

        if *nao_classificados {
            print_nao_classificados(&rows);
            return Ok(());
        }

        print_kpis(&rows);
        print_custo_por_cargo(&rows);
        print_evolucao(&rows);
        print_quadro(&dataset);
        print_nao_classificados(&rows);

        if let Some(ultima) = dataset.ultima_atualizacao() {
            println!();
            info(format!("🗓️ Atualizado até {}", format_br(ultima)));
        }
    }
    Ok(())
}

fn print_periodo(filtro: &Filtro) {
    match filtro.mes {
        Some(m) => {
            let (inicio, fim) = janela_comercial(filtro.ano, m);
            info(format!(
                "Período {} de {}: {} a {}.",
                mes_nome(m),
                filtro.ano,
                format_br(inicio),
                format_br(fim)
            ));
        }
        None => info(format!(
            "Exibindo dados de todo o ano de {}.",
            filtro.ano
        )),
    }
    if let Some(f) = &filtro.filial {
        info(format!("Filial: {}", filial_display(f)));
    }
}

fn print_kpis(rows: &[&crate::models::record::OvertimeRecord]) {
    let kpis = ReportLogic::kpis(rows);

    banner("CUSTO TOTAL COM HORAS EXTRAS", &format_brl(kpis.custo_total));

    println!();
    metric("💰 Custo HE 50%", format_brl(kpis.custo_he_50));
    metric("💰 Custo HE 100%", format_brl(kpis.custo_he_100));
    metric("👥 Colaboradores com HE", kpis.colaboradores.to_string());
    metric("⏰ Total Horas 50%", format!("{:.2}h", kpis.horas_he_50));
    metric("⏰ Total Horas 100%", format!("{:.2}h", kpis.horas_he_100));
    metric(
        "⚙️ Total Horas (50% + 100%)",
        format!("{:.2}h", kpis.horas_he_50 + kpis.horas_he_100),
    );
}

fn print_custo_por_cargo(rows: &[&crate::models::record::OvertimeRecord]) {
    header("Custo de HE por Cargo");

    let mut table = Table::new(vec![Column::new("Cargo"), Column::new("Custo Total (R$)")]);
    for (cargo, total) in ReportLogic::custo_por_cargo(rows) {
        table.add_row(vec![cargo, format_brl(total)]);
    }
    println!("{}", table.render());
}

fn print_evolucao(rows: &[&crate::models::record::OvertimeRecord]) {
    header("Evolução Diária do Custo por Filial");

    let (filiais, linhas) = ReportLogic::evolucao_diaria(rows);

    let mut columns = vec![Column::new("Data")];
    for f in &filiais {
        columns.push(Column::new(filial_display(f)));
    }

    let mut table = Table::new(columns);
    for (dia, valores) in linhas {
        let mut row = vec![format_br(dia)];
        row.extend(valores.iter().map(|v| format_brl(*v)));
        table.add_row(row);
    }
    println!("{}", table.render());
}

fn print_quadro(dataset: &Dataset) {
    if dataset.quadro.is_empty() && dataset.pendentes.is_empty() {
        return;
    }

    header("Quadro por Filial");

    let headcount = ReportLogic::headcount_ativo(&dataset.quadro);
    let mut table = Table::new(vec![
        Column::new("Filial"),
        Column::new("Ativos"),
        Column::new("Contratações Pendentes"),
    ]);

    let mut filiais: Vec<String> = headcount.iter().map(|(f, _)| f.clone()).collect();
    for p in &dataset.pendentes {
        if !filiais.contains(&p.filial) {
            filiais.push(p.filial.clone());
        }
    }
    filiais.sort();

    for filial in filiais {
        let ativos = headcount
            .iter()
            .find(|(f, _)| *f == filial)
            .map(|(_, n)| *n)
            .unwrap_or(0);
        let pendentes = dataset
            .pendentes
            .iter()
            .find(|p| p.filial == filial)
            .map(|p| p.qtd_pendente)
            .unwrap_or(0);
        table.add_row(vec![
            filial_display(&filial).to_string(),
            ativos.to_string(),
            pendentes.to_string(),
        ]);
    }
    println!("{}", table.render());
}

fn print_nao_classificados(rows: &[&crate::models::record::OvertimeRecord]) {
    let resumo = ReportLogic::nao_classificados(rows);
    if resumo.is_empty() {
        return;
    }

    header("🚨 Colaboradores não identificados na aba OPERACAO");

    let mut table = Table::new(vec![
        Column::new("Colaborador"),
        Column::new("Filial"),
        Column::new("Custo Total Não Classificado"),
        Column::new("Nº de Lançamentos"),
    ]);
    for n in resumo {
        table.add_row(vec![
            n.nome,
            n.filial,
            format_brl(n.custo_total),
            n.ocorrencias.to_string(),
        ]);
    }
    println!("{}", table.render());
}
