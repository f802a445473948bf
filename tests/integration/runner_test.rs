//! Whole runs: verdict classification and the summary

use vault_auth_suite::testing::{StubServer, setup};
use vault_auth_suite::{Case, Runner, SuiteConfig, Verdict};

#[actix_web::test]
async fn test_conforming_server_run_is_green() {
    let (runner, server) = vault_auth_suite::stub!();

    let summary = runner.run_all().await;

    assert!(summary.success(), "{}", summary);
    assert_eq!(summary.reports.len(), Case::ALL.len());
    assert_eq!(summary.count(Verdict::Passed), 7);
    assert_eq!(summary.count(Verdict::Skipped), 1);
    assert_eq!(
        summary.get(Case::TwoFactorFlow).map(|report| report.verdict),
        Some(Verdict::Skipped)
    );

    server.stop().await;
}

#[actix_web::test]
async fn test_cases_run_in_declaration_order() {
    let (runner, server) = vault_auth_suite::stub!();

    let summary = runner.run_all().await;
    let order: Vec<Case> = summary.reports.iter().map(|report| report.case).collect();

    assert_eq!(order, Case::ALL.to_vec());

    server.stop().await;
}

#[actix_web::test]
async fn test_one_failure_does_not_affect_other_cases() {
    let (runner, server) = vault_auth_suite::stub!(setup::sticky_sessions());

    let summary = runner.run_all().await;

    assert!(!summary.success());
    assert_eq!(summary.count(Verdict::Failed), 1);
    assert_eq!(
        summary.get(Case::SessionManagement).map(|report| report.verdict),
        Some(Verdict::Failed)
    );
    assert_eq!(summary.count(Verdict::Passed), 6);

    server.stop().await;
}

#[actix_web::test]
async fn test_malformed_bodies_are_errors_not_failures() {
    let (runner, server) = vault_auth_suite::stub!(setup::plain_text_errors());

    let report = runner.run_case(Case::InvalidLogin).await;

    assert_eq!(report.verdict, Verdict::Error);
    assert!(report.message.unwrap().contains("malformed response"));

    server.stop().await;
}

#[actix_web::test]
async fn test_unreachable_server_errors_every_case() {
    let server = StubServer::start(setup::conforming()).await.unwrap();
    let config = server.config();
    server.stop().await;

    let summary = Runner::new(config).quiet().run_all().await;

    assert!(!summary.success());
    assert_eq!(summary.count(Verdict::Error), Case::ALL.len());
    for report in &summary.reports {
        assert!(report.message.as_deref().unwrap_or("").contains("failed"));
    }
}

#[actix_web::test]
async fn test_trailing_slash_in_base_url() {
    let server = StubServer::start(setup::conforming()).await.unwrap();
    let config = SuiteConfig {
        base_url: format!("{}/", server.base_url()),
        ..server.config()
    };

    let summary = Runner::new(config).quiet().run_all().await;

    assert!(summary.success(), "{}", summary);

    server.stop().await;
}
