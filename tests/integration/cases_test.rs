//! Each case against conforming and misbehaving stub servers

use std::time::Duration;

use actix_web::http::StatusCode;
use vault_auth_suite::cases::paths;
use vault_auth_suite::requests::auth::{RegisterRequest, VerifyTwoFactorRequest};
use vault_auth_suite::testing::stub::GOOGLE_CONSENT_URL;
use vault_auth_suite::testing::{Behaviour, Fault, StubServer, setup};
use vault_auth_suite::{AuthClient, Case, Outcome, SuiteConfig, SuiteError};

// =============================================================================
// PAGES
// =============================================================================

#[actix_web::test]
async fn test_login_page_loads() {
    let (runner, server) = vault_auth_suite::stub!();

    let outcome = Case::LoginPageLoads.run(runner.client()).await.unwrap();
    assert_eq!(outcome, Outcome::Passed);

    server.stop().await;
}

#[actix_web::test]
async fn test_register_page_loads() {
    let (runner, server) = vault_auth_suite::stub!();

    let outcome = Case::RegisterPageLoads.run(runner.client()).await.unwrap();
    assert_eq!(outcome, Outcome::Passed);

    server.stop().await;
}

// =============================================================================
// LOGIN / REGISTRATION / RESET
// =============================================================================

#[actix_web::test]
async fn test_invalid_login_is_rejected_with_error_body() {
    let (runner, server) = vault_auth_suite::stub!();

    let outcome = Case::InvalidLogin.run(runner.client()).await.unwrap();
    assert_eq!(outcome, Outcome::Passed);

    server.stop().await;
}

#[actix_web::test]
async fn test_invalid_registration_answers_400_with_error() {
    let (runner, server) = vault_auth_suite::stub!();

    let request = RegisterRequest {
        email: "invalid-email".to_string(),
        password: "short".to_string(),
    };
    let reply = runner
        .client()
        .post_json(paths::REGISTER, &request)
        .await
        .unwrap();

    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert!(reply.json().unwrap()["error"].is_string());

    let outcome = Case::InvalidRegistration.run(runner.client()).await.unwrap();
    assert_eq!(outcome, Outcome::Passed);

    server.stop().await;
}

#[actix_web::test]
async fn test_valid_registration_is_accepted_by_stub() {
    let (runner, server) = vault_auth_suite::stub!();

    let request = RegisterRequest {
        email: "new.user@example.com".to_string(),
        password: "L0ngEnough!".to_string(),
    };
    let reply = runner
        .client()
        .post_json(paths::REGISTER, &request)
        .await
        .unwrap();

    assert_eq!(reply.status, StatusCode::CREATED);

    server.stop().await;
}

#[actix_web::test]
async fn test_password_reset_request() {
    let (runner, server) = vault_auth_suite::stub!();

    let outcome = Case::PasswordResetRequest.run(runner.client()).await.unwrap();
    assert_eq!(outcome, Outcome::Passed);

    server.stop().await;
}

#[actix_web::test]
async fn test_plain_text_errors_are_malformed_responses() {
    let (runner, server) = vault_auth_suite::stub!(setup::plain_text_errors());

    let error = Case::InvalidLogin.run(runner.client()).await.unwrap_err();
    assert!(matches!(error, SuiteError::MalformedResponse { .. }));
    assert!(!error.is_assertion());

    let error = Case::InvalidRegistration
        .run(runner.client())
        .await
        .unwrap_err();
    assert!(matches!(error, SuiteError::MalformedResponse { .. }));

    server.stop().await;
}

// =============================================================================
// OAUTH
// =============================================================================

#[actix_web::test]
async fn test_google_auth_redirect_is_not_followed() {
    let (runner, server) = vault_auth_suite::stub!();

    let reply = runner.client().get(paths::GOOGLE_AUTH).await.unwrap();
    assert_eq!(reply.status, StatusCode::FOUND);
    assert_eq!(reply.location.as_deref(), Some(GOOGLE_CONSENT_URL));

    let outcome = Case::GoogleAuthEndpoint.run(runner.client()).await.unwrap();
    assert_eq!(outcome, Outcome::Passed);

    server.stop().await;
}

#[actix_web::test]
async fn test_google_auth_page_is_accepted() {
    let (runner, server) = vault_auth_suite::stub!(setup::oauth_page());

    let outcome = Case::GoogleAuthEndpoint.run(runner.client()).await.unwrap();
    assert_eq!(outcome, Outcome::Passed);

    server.stop().await;
}

// =============================================================================
// TWO-FACTOR
// =============================================================================

#[actix_web::test]
async fn test_two_factor_skipped_without_challenge() {
    let (runner, server) = vault_auth_suite::stub!();

    let outcome = Case::TwoFactorFlow.run(runner.client()).await.unwrap();
    assert!(matches!(outcome, Outcome::Skipped(reason) if reason.contains("2fa_required")));

    server.stop().await;
}

#[actix_web::test]
async fn test_two_factor_verified_when_challenged() {
    let (runner, server) = vault_auth_suite::stub!(setup::two_factor());

    let outcome = Case::TwoFactorFlow.run(runner.client()).await.unwrap();
    assert_eq!(outcome, Outcome::Passed);

    server.stop().await;
}

#[actix_web::test]
async fn test_two_factor_skipped_when_login_fails() {
    let (runner, server) = vault_auth_suite::stub!(setup::locked_out());

    let outcome = Case::TwoFactorFlow.run(runner.client()).await.unwrap();
    assert!(matches!(outcome, Outcome::Skipped(reason) if reason.contains("401")));

    server.stop().await;
}

// =============================================================================
// SESSION
// =============================================================================

#[actix_web::test]
async fn test_session_round_trip() {
    let (runner, server) = vault_auth_suite::stub!();

    let outcome = Case::SessionManagement.run(runner.client()).await.unwrap();
    assert_eq!(outcome, Outcome::Passed);

    server.stop().await;
}

#[actix_web::test]
async fn test_session_token_survives_logout_fails() {
    let (runner, server) = vault_auth_suite::stub!(setup::sticky_sessions());

    let error = Case::SessionManagement
        .run(runner.client())
        .await
        .unwrap_err();

    assert!(error.is_assertion());
    assert!(
        error.to_string().contains("expected 401, got 200"),
        "unexpected message: {}",
        error
    );

    server.stop().await;
}

#[actix_web::test]
async fn test_session_skipped_when_login_fails() {
    let (runner, server) = vault_auth_suite::stub!(setup::locked_out());

    let outcome = Case::SessionManagement.run(runner.client()).await.unwrap();
    assert!(matches!(outcome, Outcome::Skipped(_)));

    server.stop().await;
}

#[actix_web::test]
async fn test_session_login_without_token_fails() {
    // A 2FA challenge is a 200 login reply that carries no token
    let (runner, server) = vault_auth_suite::stub!(setup::two_factor());

    let error = Case::SessionManagement
        .run(runner.client())
        .await
        .unwrap_err();

    assert!(error.is_assertion());
    assert!(error.to_string().contains("token"));

    server.stop().await;
}

// =============================================================================
// CONTRACT BREACHES
// =============================================================================

#[actix_web::test]
async fn test_pages_missing_affordance_text_fail() {
    let (runner, server) = vault_auth_suite::stub!(setup::faulty(Fault::BlankPages));

    let error = Case::LoginPageLoads.run(runner.client()).await.unwrap_err();
    assert!(error.is_assertion());
    assert!(error.to_string().contains("Secure Password Manager"));

    let error = Case::RegisterPageLoads
        .run(runner.client())
        .await
        .unwrap_err();
    assert!(error.is_assertion());
    assert!(error.to_string().contains("Create your Vault"));

    server.stop().await;
}

#[actix_web::test]
async fn test_password_reset_refused_with_400_passes() {
    let (runner, server) = vault_auth_suite::stub!(setup::faulty(Fault::ResetDisabled));

    let outcome = Case::PasswordResetRequest.run(runner.client()).await.unwrap();
    assert_eq!(outcome, Outcome::Passed);

    server.stop().await;
}

#[actix_web::test]
async fn test_password_reset_without_success_key_fails() {
    let (runner, server) = vault_auth_suite::stub!(setup::faulty(Fault::ResetWithoutSuccess));

    let error = Case::PasswordResetRequest
        .run(runner.client())
        .await
        .unwrap_err();

    assert!(error.is_assertion());
    assert!(error.to_string().contains("\"success\""));

    server.stop().await;
}

#[actix_web::test]
async fn test_google_auth_server_error_fails() {
    let (runner, server) = vault_auth_suite::stub!(setup::faulty(Fault::OAuthDown));

    let error = Case::GoogleAuthEndpoint
        .run(runner.client())
        .await
        .unwrap_err();

    assert!(error.is_assertion());
    assert!(error.to_string().contains("expected 200 or 302, got 503"));

    server.stop().await;
}

#[actix_web::test]
async fn test_invalid_registration_with_422_fails() {
    let (runner, server) =
        vault_auth_suite::stub!(setup::faulty(Fault::RejectRegistrationWith(422)));

    let error = Case::InvalidRegistration
        .run(runner.client())
        .await
        .unwrap_err();

    assert!(error.is_assertion());
    assert!(error.to_string().contains("expected 400, got 422"));

    server.stop().await;
}

#[actix_web::test]
async fn test_registration_rejects_malformed_emails() {
    let (runner, server) = vault_auth_suite::stub!();

    for email in ["a@@b.com", "a b@x.com", "a@b..com"] {
        let request = RegisterRequest {
            email: email.to_string(),
            password: "L0ngEnough!".to_string(),
        };
        let reply = runner
            .client()
            .post_json(paths::REGISTER, &request)
            .await
            .unwrap();

        assert_eq!(reply.status, StatusCode::BAD_REQUEST, "email {:?}", email);
    }

    server.stop().await;
}

#[actix_web::test]
async fn test_two_factor_rejected_code_passes() {
    let server = StubServer::start(setup::two_factor()).await.unwrap();
    let config = SuiteConfig {
        two_factor_token: "000000".to_string(),
        ..server.config()
    };
    let client = AuthClient::new(config);

    let verify = client
        .post_json(
            paths::VERIFY_TWO_FACTOR,
            &VerifyTwoFactorRequest {
                token: "000000".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(verify.status, StatusCode::UNAUTHORIZED);

    let outcome = Case::TwoFactorFlow.run(&client).await.unwrap();
    assert_eq!(outcome, Outcome::Passed);

    server.stop().await;
}

#[actix_web::test]
async fn test_two_factor_unexpected_status_fails() {
    let behaviour = Behaviour {
        require_two_factor: true,
        fault: Some(Fault::VerifyStatus(500)),
        ..Behaviour::default()
    };
    let (runner, server) = vault_auth_suite::stub!(behaviour);

    let error = Case::TwoFactorFlow.run(runner.client()).await.unwrap_err();

    assert!(error.is_assertion());
    assert!(error.to_string().contains("expected 200 or 401, got 500"));

    server.stop().await;
}

// =============================================================================
// TIMING
// =============================================================================

#[actix_web::test]
async fn test_reply_elapsed_includes_waiting_for_headers() {
    let (runner, server) = vault_auth_suite::stub!(setup::faulty(Fault::SlowPages(150)));

    let reply = runner.client().get(paths::LOGIN_PAGE).await.unwrap();

    assert_eq!(reply.status, StatusCode::OK);
    assert!(
        reply.elapsed >= Duration::from_millis(150),
        "elapsed {:?}",
        reply.elapsed
    );

    server.stop().await;
}
