//! CLI tests against a mock catalog and identity service.

mod common;

use common::{configure, run_cli_failure, run_cli_success};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CATALOG: &str = "<books><book><isbn>1</isbn><title>Ficciones</title>\
<author>Jorge Luis Borges</author><format>Bolsillo</format></book></books>";

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "ana@example.com",
            "password": "secreto"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A1",
            "refresh_token": "R1"
        })))
        .mount(server)
        .await;
}

async fn mount_refresh(server: &MockServer, access: &str) {
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(body_json(json!({"refresh_token": "R1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": access})))
        .mount(server)
        .await;
}

fn login(home: &std::path::Path) {
    run_cli_success(
        &[
            "auth",
            "login",
            "--email",
            "ana@example.com",
            "--password",
            "secreto",
        ],
        home,
    );
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    let stdout = run_cli_success(&["--version"], home.path());
    assert!(stdout.starts_with("libros "));
}

#[test]
fn delete_without_isbns_fails_before_any_io() {
    let home = TempDir::new().unwrap();

    let stderr = run_cli_failure(&["books", "delete", "--isbns", " , "], home.path());

    assert!(stderr.contains("Error: Introduce al menos un ISBN."));
    assert!(!home.path().join("data").exists());
}

#[test]
fn insert_with_blank_field_fails() {
    let home = TempDir::new().unwrap();

    let stderr = run_cli_failure(
        &["books", "insert", "--isbn", "1", "--title", "Ficciones"],
        home.path(),
    );

    assert!(stderr.contains("Error: Todos los campos son obligatorios."));
}

#[test]
fn unknown_view_is_rejected() {
    let home = TempDir::new().unwrap();

    let stderr = run_cli_failure(&["books", "list", "--view", "pretty"], home.path());

    assert!(stderr.contains("unknown view 'pretty', expected formatted or raw"));
    assert!(!home.path().join("data").exists());
}

#[test]
fn login_requires_both_fields() {
    let home = TempDir::new().unwrap();

    let stderr = run_cli_failure(&["auth", "login", "--email", "ana@example.com"], home.path());

    assert!(stderr.contains("Email y contraseña requeridos."));
}

#[test]
fn config_set_show_reset() {
    let home = TempDir::new().unwrap();

    let stdout = run_cli_success(&["config", "show"], home.path());
    assert!(stdout.contains("http://localhost:5000/api"));

    run_cli_success(
        &[
            "config",
            "set",
            "--protocol",
            "https",
            "--host",
            "libros.example.com",
            "--port",
            "8443",
            "--base-path",
            "catalogo",
        ],
        home.path(),
    );

    let stdout = run_cli_success(&["config", "show", "--json"], home.path());
    let shown: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(shown["protocol"], "https");
    assert_eq!(shown["host"], "libros.example.com");
    assert_eq!(shown["port"], 8443);
    assert_eq!(shown["base_path"], "/catalogo");

    run_cli_success(&["config", "reset"], home.path());
    let stdout = run_cli_success(&["config", "show"], home.path());
    assert!(stdout.contains("http://localhost:5000/api"));
}

#[test]
fn config_set_without_flags_fails() {
    let home = TempDir::new().unwrap();
    let stderr = run_cli_failure(&["config", "set"], home.path());
    assert!(stderr.contains("Nothing to change"));
}

#[tokio::test(flavor = "multi_thread")]
async fn books_without_session_ask_for_login() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    configure(home.path(), &server.uri(), server.address().port());

    let stderr = run_cli_failure(&["books", "list"], home.path());

    assert!(stderr.contains("No active session"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn login_then_list_recovers_session() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_refresh(&server, "A2").await;

    Mock::given(method("GET"))
        .and(path("/api/books"))
        .and(header("authorization", "Bearer A2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CATALOG))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    configure(home.path(), &server.uri(), server.address().port());
    login(home.path());

    let stdout = run_cli_success(&["books", "list", "--view", "raw"], home.path());

    assert!(stdout.contains("Datos cargados y transformados correctamente"));
    assert!(stdout.contains("Total de libros: 1"));
    assert!(stdout.contains(CATALOG));
}

#[tokio::test(flavor = "multi_thread")]
async fn options_lists_authors_and_formats() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_refresh(&server, "A2").await;

    Mock::given(method("GET"))
        .and(path("/api/books"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CATALOG))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    configure(home.path(), &server.uri(), server.address().port());
    login(home.path());

    let stdout = run_cli_success(&["books", "options", "--json"], home.path());
    let options: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(options["authors"], json!(["Jorge Luis Borges"]));
    assert_eq!(options["formats"], json!(["Bolsillo"]));
}

#[tokio::test(flavor = "multi_thread")]
async fn expired_session_shows_notice_and_logs_out() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Token expirado"})))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    configure(home.path(), &server.uri(), server.address().port());
    login(home.path());

    let stdout = run_cli_success(&["auth", "status"], home.path());
    assert!(stdout.contains("Tu sesión expiró. Por favor, inicia sesión de nuevo."));

    // The stored token is gone, so the next status makes no refresh call.
    let before = server.received_requests().await.unwrap().len();
    let stdout = run_cli_success(&["auth", "status"], home.path());
    assert!(stdout.contains("not logged in"));
    assert!(!stdout.contains("Tu sesión expiró"));
    assert_eq!(server.received_requests().await.unwrap().len(), before);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_reports_server_message() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_refresh(&server, "A2").await;

    Mock::given(method("DELETE"))
        .and(path("/api/books/delete"))
        .and(body_json(json!({"isbns": ["1", "2"]})))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<message>2 libros eliminados</message>"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    configure(home.path(), &server.uri(), server.address().port());
    login(home.path());

    let stdout = run_cli_success(&["books", "delete", "--isbns", "1, 2"], home.path());
    assert!(stdout.contains("Éxito: 2 libros eliminados"));
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_update_exits_with_error() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_refresh(&server, "A2").await;

    Mock::given(method("PUT"))
        .and(path("/api/books/update/9"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string("<message>Libro no encontrado</message>"),
        )
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    configure(home.path(), &server.uri(), server.address().port());
    login(home.path());

    let stderr = run_cli_failure(
        &["books", "update", "--isbn", "9", "--price", "3.5"],
        home.path(),
    );
    assert!(stderr.contains("Error: Libro no encontrado (Código: 404)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn logout_forgets_the_session() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let home = TempDir::new().unwrap();
    configure(home.path(), &server.uri(), server.address().port());
    login(home.path());

    run_cli_success(&["auth", "logout"], home.path());
    let stderr = run_cli_failure(&["auth", "refresh"], home.path());
    assert!(stderr.contains("Tu sesión expiró"));
}
