//! Export shape tests: CSV dialect (BOM + semicolon + Portuguese headers),
//! JSON structure.

use chrono::NaiveDate;
use overhours::core::report::NaoClassificado;
use overhours::export::{ExportFormat, ExportLogic};
use overhours::models::record::OvertimeRecord;

mod common;
use common::temp_out;

fn sample_record() -> OvertimeRecord {
    OvertimeRecord {
        nome: "JOHN".to_string(),
        filial: "VAL".to_string(),
        data: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        cargo: "Motorista".to_string(),
        qtd_he_50: 1.5,
        qtd_he_100: 0.0,
        valor_he_50: 50.0,
        valor_he_100: 0.0,
        valor_total: 100.0,
        salario_base: 2000.0,
        id_registro: "JOHN_2024-03-15".to_string(),
        ano_comercial: 2024,
        mes_comercial: 3,
        categoria: "Operacional".to_string(),
        justificativa: "pico de demanda".to_string(),
        anotado_por: "Ana".to_string(),
    }
}

#[test]
fn csv_export_dialect() {
    let out = temp_out("export_csv_dialect", "csv");
    let record = sample_record();
    let rows = vec![&record];

    ExportLogic::export(&rows, &ExportFormat::Csv, &out, true).expect("export");

    let bytes = std::fs::read(&out).expect("read output");
    // assinatura UTF-8 (BOM)
    assert_eq!(&bytes[..3], b"\xEF\xBB\xBF");

    let text = String::from_utf8(bytes[3..].to_vec()).expect("utf8");
    let mut lines = text.lines();

    assert_eq!(
        lines.next().unwrap(),
        "Data;Colaborador;Cargo;Filial;Valor Total (R$);Categoria;Justificativa;Usuario Responsavel"
    );

    let row = lines.next().unwrap();
    assert!(row.starts_with("15/03/2024;JOHN;Motorista;VAL;"));
    assert!(row.contains("R$ 100,00"));
    assert!(row.contains("pico de demanda"));
}

#[test]
fn json_export_structure() {
    let out = temp_out("export_json", "json");
    let record = sample_record();
    let rows = vec![&record];

    ExportLogic::export(&rows, &ExportFormat::Json, &out, true).expect("export");

    let text = std::fs::read_to_string(&out).expect("read output");
    let parsed: serde_json::Value = serde_json::from_str(&text).expect("valid json");

    let arr = parsed.as_array().expect("array");
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["colaborador"], "JOHN");
    assert_eq!(arr[0]["valor_total"], "R$ 100,00");
    assert_eq!(arr[0]["data"], "15/03/2024");
}

#[test]
fn xlsx_export_writes_a_file() {
    let out = temp_out("export_xlsx", "xlsx");
    let record = sample_record();
    let rows = vec![&record];

    ExportLogic::export(&rows, &ExportFormat::Xlsx, &out, true).expect("export");

    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0);
}

#[test]
fn unclassified_diagnostic_csv() {
    let out = temp_out("export_nao_classificados", "csv");
    let resumo = vec![NaoClassificado {
        nome: "FANTASMA".to_string(),
        filial: "RIB".to_string(),
        custo_total: 40.0,
        ocorrencias: 1,
    }];

    ExportLogic::export_nao_classificados(&resumo, &out, true).expect("export");

    let bytes = std::fs::read(&out).expect("read output");
    assert_eq!(&bytes[..3], b"\xEF\xBB\xBF");

    let text = String::from_utf8(bytes[3..].to_vec()).expect("utf8");
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Colaborador;Filial;Custo Total Não Classificado;Nº de Lançamentos"
    );
    assert_eq!(lines.next().unwrap(), "FANTASMA;RIB;R$ 40,00;1");
}
