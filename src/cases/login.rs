use awc::http::StatusCode;

use super::{Outcome, paths};
use crate::assert;
use crate::client::AuthClient;
use crate::error::Result;
use crate::requests::auth::LoginRequest;

pub async fn invalid_login(client: &AuthClient) -> Result<Outcome> {
    let request = LoginRequest {
        email: "invalid@example.com".to_string(),
        password: "wrongpassword".to_string(),
    };

    let reply = client.post_json(paths::LOGIN, &request).await?;

    assert::status_in(&reply, &[StatusCode::UNAUTHORIZED, StatusCode::BAD_REQUEST])?;
    assert::json_has_key(&reply, "error")?;

    Ok(Outcome::Passed)
}
