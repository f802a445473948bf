//! Ready-made stub behaviours for tests
//!
//! # Example
//! ```no_run
//! use vault_auth_suite::testing::setup;
//!
//! #[actix_web::test]
//! async fn test_something() {
//!     let (runner, server) = vault_auth_suite::stub!(setup::two_factor());
//!     // Run cases with `runner`
//!     server.stop().await;
//! }
//! ```

use super::{Behaviour, Fault};

/// Conforming server
pub fn conforming() -> Behaviour {
    Behaviour::default()
}

/// Login with the test account answers a 2FA challenge
pub fn two_factor() -> Behaviour {
    Behaviour {
        require_two_factor: true,
        ..Behaviour::default()
    }
}

/// The test account cannot log in at all
pub fn locked_out() -> Behaviour {
    Behaviour {
        accept_login: false,
        ..Behaviour::default()
    }
}

/// Logout answers 200 but the token keeps working
pub fn sticky_sessions() -> Behaviour {
    Behaviour {
        invalidate_on_logout: false,
        ..Behaviour::default()
    }
}

/// Error replies are plain text instead of JSON
pub fn plain_text_errors() -> Behaviour {
    Behaviour {
        json_errors: false,
        ..Behaviour::default()
    }
}

/// The OAuth endpoint serves a page instead of redirecting
pub fn oauth_page() -> Behaviour {
    Behaviour {
        oauth_redirect: false,
        ..Behaviour::default()
    }
}

/// Conforming server except for one endpoint
pub fn faulty(fault: Fault) -> Behaviour {
    Behaviour {
        fault: Some(fault),
        ..Behaviour::default()
    }
}
