//! End-to-end CLI tests: init → sync → report → annotate → export.

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{
    build_workbook_basic, init_with_workbook, ohr, setup_test_db, temp_out, temp_workbook,
};

#[test]
fn init_creates_the_store() {
    let db_path = setup_test_db("cli_init");

    ohr()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn sync_reports_record_count_and_last_update() {
    let db_path = setup_test_db("cli_sync");
    let wb = temp_workbook("cli_sync");
    init_with_workbook(&db_path, &wb);

    ohr()
        .args(["--db", &db_path, "--workbook", &wb, "sync"])
        .assert()
        .success()
        .stdout(contains("registros reconciliados"))
        .stdout(contains("Atualizado até 15/03/2024"));
}

#[test]
fn report_kpis_for_commercial_period() {
    let db_path = setup_test_db("cli_report");
    let wb = temp_workbook("cli_report_basic");
    build_workbook_basic(&wb);

    ohr()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ohr()
        .args([
            "--db", &db_path, "--workbook", &wb, "report", "--ano", "2024", "--mes", "3",
        ])
        .assert()
        .success()
        .stdout(contains("CUSTO TOTAL COM HORAS EXTRAS"))
        .stdout(contains("R$ 200,00"))
        .stdout(contains("Motorista"));
}

#[test]
fn report_accepts_portuguese_month_names() {
    let db_path = setup_test_db("cli_report_mes_nome");
    let wb = temp_workbook("cli_report_mes_nome");
    init_with_workbook(&db_path, &wb);

    ohr()
        .args([
            "--db", &db_path, "--workbook", &wb, "report", "--ano", "2024", "--mes", "Março",
        ])
        .assert()
        .success()
        .stdout(contains("CUSTO TOTAL COM HORAS EXTRAS"));
}

#[test]
fn report_flags_unclassified_employees() {
    let db_path = setup_test_db("cli_report_unclassified");
    let wb = temp_workbook("cli_report_unclassified");
    init_with_workbook(&db_path, &wb);

    ohr()
        .args([
            "--db",
            &db_path,
            "--workbook",
            &wb,
            "report",
            "--ano",
            "2024",
            "--mes",
            "3",
            "--nao-classificados",
        ])
        .assert()
        .success()
        .stdout(contains("FANTASMA"))
        .stdout(contains("R$ 40,00"));
}

#[test]
fn report_rejects_invalid_month_and_branch() {
    let db_path = setup_test_db("cli_report_invalid");
    let wb = temp_workbook("cli_report_invalid");
    init_with_workbook(&db_path, &wb);

    ohr()
        .args([
            "--db", &db_path, "--workbook", &wb, "report", "--ano", "2024", "--mes", "13",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));

    ohr()
        .args([
            "--db", &db_path, "--workbook", &wb, "report", "--ano", "2024", "--mes", "3",
            "--filial", "XYZ",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid branch"));
}

#[test]
fn missing_workbook_halts_with_error() {
    let db_path = setup_test_db("cli_missing_workbook");

    ohr()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ohr()
        .args([
            "--db",
            &db_path,
            "--workbook",
            "/nonexistent/banco_de_horas.xlsx",
            "sync",
        ])
        .assert()
        .failure()
        .stderr(contains("Workbook error"));
}

#[test]
fn list_shows_records_for_a_date() {
    let db_path = setup_test_db("cli_list");
    let wb = temp_workbook("cli_list");
    init_with_workbook(&db_path, &wb);

    ohr()
        .args([
            "--db",
            &db_path,
            "--workbook",
            &wb,
            "list",
            "--ano",
            "2024",
            "--mes",
            "3",
            "--data",
            "2024-03-15",
        ])
        .assert()
        .success()
        .stdout(contains("JOHN"))
        .stdout(contains("15/03/2024"))
        .stdout(contains("1 registro(s)"));
}

#[test]
fn annotate_grid_round_trip() {
    let db_path = setup_test_db("cli_annotate");
    let wb = temp_workbook("cli_annotate");
    init_with_workbook(&db_path, &wb);

    let grid = temp_out("cli_annotate_grid", "csv");

    // 1) escreve o grid do dia
    ohr()
        .args([
            "--db",
            &db_path,
            "--workbook",
            &wb,
            "annotate",
            "--ano",
            "2024",
            "--mes",
            "2",
            "--data",
            "2024-01-21",
            "--grid",
            &grid,
        ])
        .assert()
        .success()
        .stdout(contains("Grid written"));

    let content = fs::read_to_string(&grid).expect("grid file");
    assert!(content.contains("MARIA SILVA_2024-01-21"));

    // 2) edita categoria + justificativa e aplica
    let edited = temp_out("cli_annotate_edited", "csv");
    fs::write(
        &edited,
        "id_registro;Data;Colaborador;Cargo;Valor Total (R$);Categoria;Justificativa\n\
         MARIA SILVA_2024-01-21;21/01/2024;MARIA SILVA;Conferente;R$ 150,00;Escala;Troca de turno\n",
    )
    .expect("write edited grid");

    ohr()
        .args([
            "--db",
            &db_path,
            "--workbook",
            &wb,
            "annotate",
            "--ano",
            "2024",
            "--mes",
            "2",
            "--data",
            "2024-01-21",
            "--apply",
            &edited,
        ])
        .assert()
        .success()
        .stdout(contains("1 anotações salvas/atualizadas"));

    // 3) anotação persistida no store
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let (categoria, justificativa): (String, String) = conn
        .query_row(
            "SELECT categoria, justificativa FROM anotacoes WHERE id_registro = ?1",
            ["MARIA SILVA_2024-01-21"],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .expect("annotation row");
    assert_eq!(categoria, "Escala");
    assert_eq!(justificativa, "Troca de turno");

    // 4) o próximo list já mostra a anotação (cache foi invalidado)
    ohr()
        .args([
            "--db",
            &db_path,
            "--workbook",
            &wb,
            "list",
            "--ano",
            "2024",
            "--mes",
            "2",
            "--data",
            "2024-01-21",
        ])
        .assert()
        .success()
        .stdout(contains("Escala").and(contains("Troca de turno")));
}

#[test]
fn annotate_apply_rejects_category_without_justification() {
    let db_path = setup_test_db("cli_annotate_invalid");
    let wb = temp_workbook("cli_annotate_invalid");
    init_with_workbook(&db_path, &wb);

    let edited = temp_out("cli_annotate_invalid_edit", "csv");
    fs::write(
        &edited,
        "id_registro;Data;Colaborador;Cargo;Valor Total (R$);Categoria;Justificativa\n\
         MARIA SILVA_2024-01-21;21/01/2024;MARIA SILVA;Conferente;R$ 150,00;Escala;\n",
    )
    .expect("write edited grid");

    ohr()
        .args([
            "--db",
            &db_path,
            "--workbook",
            &wb,
            "annotate",
            "--ano",
            "2024",
            "--mes",
            "2",
            "--data",
            "2024-01-21",
            "--apply",
            &edited,
        ])
        .assert()
        .failure()
        .stderr(contains("exige uma justificativa"));

    // nada foi gravado
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM anotacoes", [], |row| row.get(0))
        .expect("count");
    assert_eq!(count, 0);
}

#[test]
fn export_csv_from_cli() {
    let db_path = setup_test_db("cli_export");
    let wb = temp_workbook("cli_export");
    init_with_workbook(&db_path, &wb);

    let out = temp_out("cli_export", "csv");

    ohr()
        .args([
            "--db", &db_path, "--workbook", &wb, "export", "--ano", "2024", "--mes", "3",
            "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let bytes = fs::read(&out).expect("output exists");
    assert_eq!(&bytes[..3], b"\xEF\xBB\xBF");
    let text = String::from_utf8(bytes[3..].to_vec()).expect("utf8");
    assert!(text.starts_with("Data;Colaborador;Cargo;Filial;Valor Total (R$)"));
    assert!(text.contains("JOHN"));
}

#[test]
fn user_lifecycle_add_verify_login_logout() {
    let db_path = setup_test_db("cli_user");

    ohr()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ohr()
        .args([
            "--db",
            &db_path,
            "user",
            "--add",
            "--nome",
            "Ana Souza",
            "--email",
            "ana@example.com",
            "--senha",
            "segredo123",
            "--departamento",
            "RH",
        ])
        .assert()
        .success()
        .stdout(contains("created"));

    ohr()
        .args([
            "--db",
            &db_path,
            "user",
            "--verify",
            "--email",
            "ana@example.com",
            "--senha",
            "segredo123",
        ])
        .assert()
        .success()
        .stdout(contains("Credentials OK"));

    ohr()
        .args([
            "--db",
            &db_path,
            "user",
            "--verify",
            "--email",
            "ana@example.com",
            "--senha",
            "errada",
        ])
        .assert()
        .failure()
        .stderr(contains("inválidos"));

    ohr()
        .args(["--db", &db_path, "user", "--logout"])
        .assert()
        .success();
}

#[test]
fn internal_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    let wb = temp_workbook("cli_log");
    init_with_workbook(&db_path, &wb);

    ohr()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init").and(contains("sync")));
}
