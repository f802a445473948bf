//! HTML report written after a run

use std::path::PathBuf;

use vault_auth_suite::report;
use vault_auth_suite::testing::setup;
use vault_auth_suite::SuiteError;

fn temp_report(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("vault-auth-suite-{}-{}.html", name, std::process::id()))
}

#[actix_web::test]
async fn test_report_written_after_run() {
    let (runner, server) = vault_auth_suite::stub!(setup::sticky_sessions());
    let summary = runner.run_all().await;
    let path = temp_report("run");

    report::write(&path, &summary, server.base_url()).await.unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<td>session_management</td>"));
    assert!(html.contains("test result: FAILED"));
    assert!(html.contains(server.base_url()));

    let _ = std::fs::remove_file(&path);
    server.stop().await;
}

#[actix_web::test]
async fn test_report_to_missing_directory_is_report_error() {
    let (runner, server) = vault_auth_suite::stub!();
    let summary = runner.run(&[]).await;
    let path = std::env::temp_dir()
        .join("vault-auth-suite-missing-dir")
        .join("nested")
        .join("report.html");

    let error = report::write(&path, &summary, server.base_url())
        .await
        .unwrap_err();

    assert!(matches!(error, SuiteError::Report { .. }));

    server.stop().await;
}
