//! The cases the suite runs against the server under test
//!
//! Every case is independent: it builds its own requests, holds no state
//! between runs and does not rely on another case having run first.

pub mod login;
pub mod oauth;
pub mod pages;
pub mod password_reset;
pub mod registration;
pub mod session;
pub mod two_factor;

use std::fmt;

use crate::client::AuthClient;
use crate::error::Result;

pub mod paths {
    pub const LOGIN_PAGE: &str = "/login";
    pub const REGISTER_PAGE: &str = "/register";
    pub const LOGIN: &str = "/api/login";
    pub const REGISTER: &str = "/api/register";
    pub const RESET_PASSWORD: &str = "/api/reset-password";
    pub const GOOGLE_AUTH: &str = "/api/auth/google";
    pub const VERIFY_TWO_FACTOR: &str = "/api/verify-2fa";
    pub const PROTECTED: &str = "/api/protected";
    pub const LOGOUT: &str = "/api/logout";
}

/// How a case ended when it did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    /// The server never reached the state the case needs
    Skipped(String),
}

impl Outcome {
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped(reason.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    LoginPageLoads,
    InvalidLogin,
    PasswordResetRequest,
    GoogleAuthEndpoint,
    RegisterPageLoads,
    InvalidRegistration,
    TwoFactorFlow,
    SessionManagement,
}

impl Case {
    pub const ALL: [Case; 8] = [
        Case::LoginPageLoads,
        Case::InvalidLogin,
        Case::PasswordResetRequest,
        Case::GoogleAuthEndpoint,
        Case::RegisterPageLoads,
        Case::InvalidRegistration,
        Case::TwoFactorFlow,
        Case::SessionManagement,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Case::LoginPageLoads => "login_page_loads",
            Case::InvalidLogin => "invalid_login",
            Case::PasswordResetRequest => "password_reset_request",
            Case::GoogleAuthEndpoint => "google_auth_endpoint",
            Case::RegisterPageLoads => "register_page_loads",
            Case::InvalidRegistration => "invalid_registration",
            Case::TwoFactorFlow => "two_factor_flow",
            Case::SessionManagement => "session_management",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Case::LoginPageLoads => "login page loads",
            Case::InvalidLogin => "login with invalid credentials is rejected",
            Case::PasswordResetRequest => "password reset request is accepted or rejected cleanly",
            Case::GoogleAuthEndpoint => "Google auth endpoint is available",
            Case::RegisterPageLoads => "registration page loads",
            Case::InvalidRegistration => "registration with invalid data is rejected",
            Case::TwoFactorFlow => "2FA verification answers when 2FA is enabled",
            Case::SessionManagement => "logout invalidates the session token",
        }
    }

    pub async fn run(self, client: &AuthClient) -> Result<Outcome> {
        match self {
            Case::LoginPageLoads => pages::login_page_loads(client).await,
            Case::InvalidLogin => login::invalid_login(client).await,
            Case::PasswordResetRequest => password_reset::password_reset_request(client).await,
            Case::GoogleAuthEndpoint => oauth::google_auth_endpoint(client).await,
            Case::RegisterPageLoads => pages::register_page_loads(client).await,
            Case::InvalidRegistration => registration::invalid_registration(client).await,
            Case::TwoFactorFlow => two_factor::two_factor_flow(client).await,
            Case::SessionManagement => session::session_management(client).await,
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
