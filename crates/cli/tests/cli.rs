use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("bookstore-cli").unwrap();
    cmd.env("BOOKSTORE_CONFIG_DIR", "/nonexistent/bookstore-config")
        .env_remove("BOOKSTORE_ENV")
        .env_remove("BOOKSTORE_SERVER__PORT")
        .env_remove("BOOKSTORE_BOOKS__SEED_CATALOG");
    cmd
}

#[test]
fn settings_prints_defaults() {
    let output = cli().arg("settings").assert().success().get_output().stdout.clone();
    let settings: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(settings["environment"], "local");
    assert_eq!(settings["server"]["port"], 8080);
    assert_eq!(settings["books"]["seed_catalog"], true);
}

#[test]
fn settings_honours_environment_overrides() {
    let output = cli()
        .env("BOOKSTORE_ENV", "staging")
        .env("BOOKSTORE_SERVER__PORT", "9191")
        .arg("settings")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let settings: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(settings["environment"], "staging");
    assert_eq!(settings["server"]["port"], 9191);
}

#[test]
fn unknown_environment_is_rejected() {
    cli()
        .env("BOOKSTORE_ENV", "qa")
        .arg("settings")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported environment 'qa'"));
}

#[test]
fn openapi_lists_book_routes() {
    cli()
        .arg("openapi")
        .assert()
        .success()
        .stdout(predicate::str::contains("/api/books/{book_id}"))
        .stdout(predicate::str::contains("\"BookUpdate\""));
}

#[test]
fn missing_subcommand_prints_usage() {
    cli()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
