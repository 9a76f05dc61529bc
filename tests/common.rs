#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rust_xlsxwriter::Workbook;
use std::env;
use std::path::PathBuf;

pub fn ohr() -> Command {
    let mut cmd = cargo_bin_cmd!("overhours");
    // HOME isolado: nenhum teste deve ler a config real do usuário
    cmd.env("HOME", env::temp_dir());
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file (the dataset snapshot lives next to it and is removed too)
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_overhours.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&db_path).ok();
    std::fs::remove_file(format!("{}.cache.json", db_path)).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    std::fs::remove_file(&p).ok();
    p
}

/// Workbook fixture path (unique per test).
pub fn temp_workbook(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_banco_de_horas.xlsx", name));
    let p = path.to_string_lossy().to_string();
    std::fs::remove_file(&p).ok();
    p
}

const HORAS_HEADERS: [&str; 8] = [
    "Data",
    "Colaborador",
    "Qtd HE 50%",
    "Qtd HE 100%",
    "Valor HE 50%",
    "Valor HE 100%",
    "Valor Total",
    "Salario Base",
];

fn write_horas_tab(
    workbook: &mut Workbook,
    tab: &str,
    rows: &[[&str; 8]],
) -> Result<(), rust_xlsxwriter::XlsxError> {
    let ws = workbook.add_worksheet();
    ws.set_name(tab)?;
    for (c, h) in HORAS_HEADERS.iter().enumerate() {
        ws.write_string(0, c as u16, *h)?;
    }
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            ws.write_string((r + 1) as u32, c as u16, *value)?;
        }
    }
    Ok(())
}

fn write_lookup_tab(
    workbook: &mut Workbook,
    tab: &str,
    headers: &[&str],
    rows: &[Vec<&str>],
) -> Result<(), rust_xlsxwriter::XlsxError> {
    let ws = workbook.add_worksheet();
    ws.set_name(tab)?;
    for (c, h) in headers.iter().enumerate() {
        ws.write_string(0, c as u16, *h)?;
    }
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            ws.write_string((r + 1) as u32, c as u16, *value)?;
        }
    }
    Ok(())
}

/// Minimal two-branch workbook: the same employee logged in VAL and RIB on
/// the same day, 1:30 at 50% and R$ 100,00 each.
pub fn build_workbook_basic(path: &str) {
    let mut workbook = Workbook::new();

    let john = [
        "15/03/2024",
        "John",
        "01:30:00",
        "00:00:00",
        "R$ 50,00",
        "R$ 0,00",
        "R$ 100,00",
        "R$ 2.000,00",
    ];
    write_horas_tab(&mut workbook, "VAL", &[john]).expect("VAL tab");
    write_horas_tab(&mut workbook, "RIB", &[john]).expect("RIB tab");

    write_lookup_tab(
        &mut workbook,
        "OPERACAO",
        &["Colaborador", "Cargo"],
        &[vec!["John", "Motorista"]],
    )
    .expect("OPERACAO tab");

    write_lookup_tab(
        &mut workbook,
        "QUADRO",
        &["Colaborador", "Cargo", "Filial", "Status"],
        &[vec!["John", "Motorista", "VAL", "Ativo"]],
    )
    .expect("QUADRO tab");

    workbook.save(path).expect("save workbook");
}

/// Richer workbook: distinct employees per branch, one of them missing
/// from OPERACAO (unclassified), plus roster rows and a January record
/// past the commercial cutoff.
pub fn build_workbook_rich(path: &str) {
    let mut workbook = Workbook::new();

    write_horas_tab(
        &mut workbook,
        "VAL",
        &[
            [
                "15/03/2024",
                "John",
                "01:30:00",
                "00:00:00",
                "R$ 50,00",
                "R$ 0,00",
                "R$ 100,00",
                "R$ 2.000,00",
            ],
            [
                "21/01/2024",
                "Maria Silva",
                "02:00:00",
                "01:00:00",
                "R$ 90,00",
                "R$ 60,00",
                "R$ 150,00",
                "R$ 2.500,00",
            ],
        ],
    )
    .expect("VAL tab");

    write_horas_tab(
        &mut workbook,
        "RIB",
        &[
            [
                "10/03/2024",
                "Pedro Souza",
                "00:45:00",
                "00:00:00",
                "R$ 30,00",
                "R$ 0,00",
                "R$ 30,00",
                "R$ 1.800,00",
            ],
            [
                "12/03/2024",
                "Fantasma",
                "01:00:00",
                "00:00:00",
                "R$ 40,00",
                "R$ 0,00",
                "R$ 40,00",
                "R$ 1.700,00",
            ],
        ],
    )
    .expect("RIB tab");

    write_lookup_tab(
        &mut workbook,
        "OPERACAO",
        &["Colaborador", "Cargo"],
        &[
            vec!["John", "Motorista"],
            vec!["Maria Silva", "Conferente"],
            vec!["Pedro Souza", "Auxiliar"],
        ],
    )
    .expect("OPERACAO tab");

    write_lookup_tab(
        &mut workbook,
        "QUADRO",
        &["Colaborador", "Cargo", "Filial", "Status"],
        &[
            vec!["John", "Motorista", "VAL", "Ativo"],
            vec!["Maria Silva", "Conferente", "VAL", "Ativo"],
            vec!["Pedro Souza", "Auxiliar", "RIB", "Ativo"],
            vec!["Antigo Colaborador", "Motorista", "RIB", "Desligado"],
        ],
    )
    .expect("QUADRO tab");

    workbook.save(path).expect("save workbook");
}

/// init + sync against a fixture workbook, ready for report/annotate tests
pub fn init_with_workbook(db_path: &str, workbook_path: &str) {
    build_workbook_rich(workbook_path);

    ohr()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    ohr()
        .args(["--db", db_path, "--workbook", workbook_path, "sync"])
        .assert()
        .success();
}
