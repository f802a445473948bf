use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::http::header::{AUTHORIZATION, LOCATION};
use actix_web::web::{Data, Json, ServiceConfig};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, HttpResponseBuilder};
use dashmap::DashSet;
use once_cell::sync::Lazy;
use regex::Regex;

use super::pages;
use crate::config::SuiteConfig;
use crate::requests::auth::{
    LoginRequest, RegisterRequest, ResetPasswordRequest, VerifyTwoFactorRequest,
};
use crate::responses::auth::{Authenticated, ErrorBody, SuccessBody, TwoFactorChallenge};

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const GOOGLE_CONSENT_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    // Requires at least one dot after @ for TLD
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    ).unwrap()
});

/// A single endpoint answering outside its contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// `/login` and `/register` serve a maintenance page
    BlankPages,
    /// `/login` and `/register` wait this many milliseconds before answering
    SlowPages(u64),
    /// Password reset is refused with 400
    ResetDisabled,
    /// Password reset answers 200 without a `success` key
    ResetWithoutSuccess,
    /// The OAuth endpoint answers 503
    OAuthDown,
    /// `/api/verify-2fa` always answers this status
    VerifyStatus(u16),
    /// Invalid registrations are refused with this status instead of 400
    RejectRegistrationWith(u16),
}

/// Knobs turning the conforming stub into a misbehaving one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Behaviour {
    /// The configured test account can log in
    pub accept_login: bool,
    /// A successful login answers with a 2FA challenge instead of a token
    pub require_two_factor: bool,
    /// Logout revokes the token
    pub invalidate_on_logout: bool,
    /// The OAuth endpoint redirects instead of serving a page
    pub oauth_redirect: bool,
    /// Error replies are JSON `{"error": ..}` rather than plain text
    pub json_errors: bool,
    pub fault: Option<Fault>,
}

impl Default for Behaviour {
    fn default() -> Self {
        Self {
            accept_login: true,
            require_two_factor: false,
            invalidate_on_logout: true,
            oauth_redirect: true,
            json_errors: true,
            fault: None,
        }
    }
}

struct State {
    behaviour: Behaviour,
    account: LoginRequest,
    two_factor_token: String,
    sessions: DashSet<String>,
    issued: AtomicU64,
}

impl State {
    fn issue(&self) -> String {
        let token = format!("stub-{:016x}", self.issued.fetch_add(1, Ordering::Relaxed) + 1);
        self.sessions.insert(token.clone());

        token
    }

    fn active(&self, token: &str) -> bool {
        self.sessions.contains(token)
    }

    fn revoke(&self, token: &str) {
        self.sessions.remove(token);
    }

    fn fault(&self, fault: Fault) -> bool {
        self.behaviour.fault == Some(fault)
    }

    async fn page(&self, body: &'static str) -> HttpResponse {
        if let Some(Fault::SlowPages(millis)) = self.behaviour.fault {
            actix_web::rt::time::sleep(Duration::from_millis(millis)).await;
        }

        if self.fault(Fault::BlankPages) {
            return page(pages::MAINTENANCE);
        }

        page(body)
    }

    fn error(&self, mut response: HttpResponseBuilder, message: &str) -> HttpResponse {
        if self.behaviour.json_errors {
            response.json(ErrorBody {
                error: message.to_string(),
            })
        } else {
            response.content_type("text/plain").body(message.to_string())
        }
    }
}

/// A running stub bound to an ephemeral local port
pub struct StubServer {
    base_url: String,
    handle: ServerHandle,
}

impl StubServer {
    /// Must be called from within an actix system (`#[actix_web::test]`).
    pub async fn start(behaviour: Behaviour) -> io::Result<Self> {
        let defaults = SuiteConfig::default();
        let state = Data::new(State {
            behaviour,
            account: defaults.credentials(),
            two_factor_token: defaults.two_factor_token,
            sessions: DashSet::new(),
            issued: AtomicU64::new(0),
        });

        let server = HttpServer::new(move || App::new().app_data(state.clone()).configure(route))
            .workers(1)
            .disable_signals()
            .bind(("127.0.0.1", 0))?;

        let addr = server
            .addrs()
            .first()
            .copied()
            .ok_or_else(|| io::Error::new(io::ErrorKind::AddrNotAvailable, "stub server has no address"))?;

        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);

        tracing::debug!("Stub server listening on {}", addr);

        Ok(Self {
            base_url: format!("http://{}", addr),
            handle,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Default configuration aimed at this stub
    pub fn config(&self) -> SuiteConfig {
        SuiteConfig {
            base_url: self.base_url.clone(),
            ..SuiteConfig::default()
        }
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

pub fn route(app: &mut ServiceConfig) {
    app.service(login_page);
    app.service(register_page);
    app.service(login);
    app.service(register);
    app.service(reset_password);
    app.service(google);
    app.service(verify_two_factor);
    app.service(protected);
    app.service(logout);
}

fn bearer(request: &HttpRequest) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

fn page(body: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

#[get("/login")]
async fn login_page(state: Data<State>) -> HttpResponse {
    state.page(pages::LOGIN).await
}

#[get("/register")]
async fn register_page(state: Data<State>) -> HttpResponse {
    state.page(pages::REGISTER).await
}

#[post("/api/login")]
async fn login(state: Data<State>, Json(request): Json<LoginRequest>) -> HttpResponse {
    if !state.behaviour.accept_login || request != state.account {
        return state.error(HttpResponse::Unauthorized(), "Invalid email or password");
    }

    if state.behaviour.require_two_factor {
        return HttpResponse::Ok().json(TwoFactorChallenge { required: true });
    }

    HttpResponse::Ok().json(Authenticated {
        token: state.issue(),
    })
}

#[post("/api/register")]
async fn register(state: Data<State>, Json(request): Json<RegisterRequest>) -> HttpResponse {
    let rejection = match state.behaviour.fault {
        Some(Fault::RejectRegistrationWith(status)) => {
            StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_REQUEST)
        }
        _ => StatusCode::BAD_REQUEST,
    };

    if !valid_email(&request.email) {
        return state.error(
            HttpResponse::build(rejection),
            "Please enter a valid email address",
        );
    }

    if request.password.chars().count() < MIN_PASSWORD_LENGTH {
        return state.error(
            HttpResponse::build(rejection),
            "Password must contain at least 8 characters",
        );
    }

    HttpResponse::Created().json(SuccessBody {
        success: true,
        message: "Account created".to_string(),
    })
}

#[post("/api/reset-password")]
async fn reset_password(
    state: Data<State>,
    Json(request): Json<ResetPasswordRequest>,
) -> HttpResponse {
    if state.fault(Fault::ResetDisabled) {
        return state.error(HttpResponse::BadRequest(), "Password reset is disabled");
    }

    if !valid_email(&request.email) {
        return state.error(HttpResponse::BadRequest(), "Please enter a valid email address");
    }

    if state.fault(Fault::ResetWithoutSuccess) {
        return HttpResponse::Ok().json(serde_json::json!({ "message": "Request queued" }));
    }

    HttpResponse::Ok().json(SuccessBody {
        success: true,
        message: "Password reset email sent".to_string(),
    })
}

#[get("/api/auth/google")]
async fn google(state: Data<State>) -> HttpResponse {
    if state.fault(Fault::OAuthDown) {
        return state.error(HttpResponse::ServiceUnavailable(), "OAuth provider unavailable");
    }

    if state.behaviour.oauth_redirect {
        return HttpResponse::Found()
            .insert_header((LOCATION, GOOGLE_CONSENT_URL))
            .finish();
    }

    page(pages::GOOGLE_CONSENT)
}

#[post("/api/verify-2fa")]
async fn verify_two_factor(
    state: Data<State>,
    Json(request): Json<VerifyTwoFactorRequest>,
) -> HttpResponse {
    if let Some(Fault::VerifyStatus(status)) = state.behaviour.fault {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return state.error(HttpResponse::build(status), "Verification unavailable");
    }

    if request.token != state.two_factor_token {
        return state.error(HttpResponse::Unauthorized(), "Invalid verification code");
    }

    HttpResponse::Ok().json(Authenticated {
        token: state.issue(),
    })
}

#[get("/api/protected")]
async fn protected(state: Data<State>, request: HttpRequest) -> HttpResponse {
    match bearer(&request) {
        Some(token) if state.active(token) => HttpResponse::Ok().json(SuccessBody {
            success: true,
            message: "Access granted".to_string(),
        }),
        _ => state.error(HttpResponse::Unauthorized(), "Unauthorized"),
    }
}

#[post("/api/logout")]
async fn logout(state: Data<State>, request: HttpRequest) -> HttpResponse {
    let token = match bearer(&request) {
        Some(token) if state.active(token) => token,
        _ => return state.error(HttpResponse::Unauthorized(), "Unauthorized"),
    };

    if state.behaviour.invalidate_on_logout {
        state.revoke(token);
    }

    HttpResponse::Ok().json(SuccessBody {
        success: true,
        message: "Logged out".to_string(),
    })
}
