use awc::http::StatusCode;

use super::{Outcome, paths};
use crate::assert;
use crate::client::AuthClient;
use crate::error::Result;
use crate::requests::auth::VerifyTwoFactorRequest;
use crate::responses::auth::{LoginReply, TWO_FACTOR_REQUIRED};

/// Only meaningful on servers that challenge the test account for a second
/// factor; skipped everywhere else.
pub async fn two_factor_flow(client: &AuthClient) -> Result<Outcome> {
    let config = client.config();
    let login = client.post_json(paths::LOGIN, &config.credentials()).await?;

    if login.status != StatusCode::OK {
        return Ok(Outcome::skipped(format!(
            "login answered {}, 2FA not reached",
            login.status.as_u16()
        )));
    }

    let reply = LoginReply::from_json(&login.json()?);
    if !reply.two_factor_required {
        return Ok(Outcome::skipped(format!(
            "login reply has no {:?} key, 2FA not enabled",
            TWO_FACTOR_REQUIRED
        )));
    }

    let request = VerifyTwoFactorRequest {
        token: config.two_factor_token.clone(),
    };
    let verify = client.post_json(paths::VERIFY_TWO_FACTOR, &request).await?;

    assert::status_in(&verify, &[StatusCode::OK, StatusCode::UNAUTHORIZED])?;

    Ok(Outcome::Passed)
}
