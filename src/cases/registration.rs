use awc::http::StatusCode;

use super::{Outcome, paths};
use crate::assert;
use crate::client::AuthClient;
use crate::error::Result;
use crate::requests::auth::RegisterRequest;

/// Malformed email and a password below the minimum length must both be
/// refused with exactly 400.
pub async fn invalid_registration(client: &AuthClient) -> Result<Outcome> {
    let request = RegisterRequest {
        email: "invalid-email".to_string(),
        password: "short".to_string(),
    };

    let reply = client.post_json(paths::REGISTER, &request).await?;

    assert::status_is(&reply, StatusCode::BAD_REQUEST)?;
    assert::json_has_key(&reply, "error")?;

    Ok(Outcome::Passed)
}
