//! Annotation-store tests: migrations, window queries and credentials.

use overhours::core::auth::{AuthLogic, gerar_sal, hash_senha, verify_senha};
use overhours::db::initialize::init_db;
use overhours::db::migrate::run_pending_migrations;
use overhours::db::pool::DbPool;
use overhours::db::queries::{fetch_anotacoes, fetch_pending_hires, find_usuario_by_email};
use rusqlite::params;

mod common;
use common::setup_test_db;

#[test]
fn migrations_are_idempotent() {
    let db_path = setup_test_db("db_migrations_idempotent");
    let pool = DbPool::new(&db_path).expect("open db");

    run_pending_migrations(&pool.conn).expect("first run");
    run_pending_migrations(&pool.conn).expect("second run");

    // tabelas essenciais existem
    for table in ["anotacoes", "contratacoes", "usuarios", "log"] {
        let found: i64 = pool
            .conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                [table],
                |row| row.get(0),
            )
            .expect("probe table");
        assert_eq!(found, 1, "missing table {}", table);
    }
}

#[test]
fn legacy_free_text_table_is_upgraded() {
    let db_path = setup_test_db("db_legacy_upgrade");
    let pool = DbPool::new(&db_path).expect("open db");

    // schema antigo: só texto_anotacao
    pool.conn
        .execute_batch(
            r#"
            CREATE TABLE anotacoes (
                id_registro      TEXT PRIMARY KEY,
                nome_usuario     TEXT,
                texto_anotacao   TEXT,
                data_modificacao TEXT
            );
            INSERT INTO anotacoes (id_registro, nome_usuario, texto_anotacao, data_modificacao)
            VALUES ('JOHN_2024-03-15', 'Ana', 'texto livre antigo', '2024-03-16T10:00:00');
            "#,
        )
        .expect("legacy schema");

    init_db(&pool.conn).expect("migrate");

    let mut pool = pool;
    let anotacoes = fetch_anotacoes(&mut pool).expect("fetch");
    assert_eq!(anotacoes.len(), 1);
    assert_eq!(anotacoes[0].id_registro, "JOHN_2024-03-15");
    assert_eq!(anotacoes[0].justificativa, "texto livre antigo");
    assert_eq!(anotacoes[0].categoria, "");
    assert_eq!(anotacoes[0].nome_usuario, "Ana");
}

#[test]
fn pending_hires_reads_latest_snapshot_per_branch() {
    let db_path = setup_test_db("db_pending_hires");
    let mut pool = DbPool::new(&db_path).expect("open db");
    init_db(&pool.conn).expect("init");

    pool.conn
        .execute_batch(
            r#"
            INSERT INTO contratacoes (filial, qtd_pendente, registrado_em) VALUES
                ('VAL', 5, '2024-03-01T08:00:00'),
                ('VAL', 2, '2024-03-10T08:00:00'),
                ('RIB', 1, '2024-03-05T08:00:00');
            "#,
        )
        .expect("seed history");

    // empate no registrado_em → decide o id substituto (mais alto vence)
    pool.conn
        .execute(
            "INSERT INTO contratacoes (filial, qtd_pendente, registrado_em) VALUES (?1, ?2, ?3)",
            params!["RIB", 4, "2024-03-05T08:00:00"],
        )
        .expect("seed tie");

    let pendentes = fetch_pending_hires(&mut pool).expect("fetch");

    assert_eq!(pendentes.len(), 2);
    let rib = pendentes.iter().find(|p| p.filial == "RIB").expect("RIB");
    let val = pendentes.iter().find(|p| p.filial == "VAL").expect("VAL");
    assert_eq!(rib.qtd_pendente, 4);
    assert_eq!(val.qtd_pendente, 2);
}

#[test]
fn password_hashing_round_trip() {
    let sal = gerar_sal();
    let hash = hash_senha(&sal, "segredo123");

    assert!(verify_senha(&sal, "segredo123", &hash));
    assert!(!verify_senha(&sal, "outra", &hash));

    // sais diferentes → hashes diferentes para a mesma senha
    let outro_sal = gerar_sal();
    assert_ne!(hash_senha(&outro_sal, "segredo123"), hash);
}

#[test]
fn register_and_authenticate() {
    let db_path = setup_test_db("db_auth");
    let mut pool = DbPool::new(&db_path).expect("open db");
    init_db(&pool.conn).expect("init");

    AuthLogic::register(&mut pool, "Ana Souza", "ana@example.com", "segredo123", "RH")
        .expect("register");

    let stored = find_usuario_by_email(&pool.conn, "ana@example.com")
        .expect("find")
        .expect("exists");
    assert_ne!(stored.senha_hash, "segredo123"); // nunca em claro
    assert_eq!(stored.departamento, "RH");

    let ok = AuthLogic::authenticate(&mut pool, "ana@example.com", "segredo123").expect("auth");
    assert_eq!(ok.expect("authenticated").nome, "Ana Souza");

    let bad = AuthLogic::authenticate(&mut pool, "ana@example.com", "errada").expect("auth");
    assert!(bad.is_none());

    let unknown = AuthLogic::authenticate(&mut pool, "ninguem@example.com", "x").expect("auth");
    assert!(unknown.is_none());

    // email duplicado é recusado
    assert!(AuthLogic::register(&mut pool, "Outra", "ana@example.com", "abcdef", "").is_err());
}
