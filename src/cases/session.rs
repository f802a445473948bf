use awc::http::StatusCode;

use super::{Outcome, paths};
use crate::assert;
use crate::client::AuthClient;
use crate::error::{Result, SuiteError};
use crate::responses::auth::LoginReply;

/// login -> protected -> logout -> protected again
///
/// The token must authorize access until logout and never afterwards.
pub async fn session_management(client: &AuthClient) -> Result<Outcome> {
    let login = client
        .post_json(paths::LOGIN, &client.config().credentials())
        .await?;

    if login.status != StatusCode::OK {
        return Ok(Outcome::skipped(format!(
            "login answered {}, no session to manage",
            login.status.as_u16()
        )));
    }

    let token = match LoginReply::from_json(&login.json()?).token {
        Some(token) => token,
        None => {
            return Err(SuiteError::assertion(
                format!("{} body", login.endpoint),
                "a \"token\" value",
                "no token",
            ));
        }
    };

    let protected = client.get_with_bearer(paths::PROTECTED, &token).await?;
    assert::status_is(&protected, StatusCode::OK)?;

    let logout = client.post_with_bearer(paths::LOGOUT, &token).await?;
    assert::status_is(&logout, StatusCode::OK)?;

    let revoked = client.get_with_bearer(paths::PROTECTED, &token).await?;
    assert::status_is(&revoked, StatusCode::UNAUTHORIZED)?;

    Ok(Outcome::Passed)
}
