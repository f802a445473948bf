use awc::http::StatusCode;

use super::{Outcome, paths};
use crate::assert;
use crate::client::AuthClient;
use crate::error::Result;
use crate::requests::auth::ResetPasswordRequest;

pub async fn password_reset_request(client: &AuthClient) -> Result<Outcome> {
    let request = ResetPasswordRequest {
        email: "test@example.com".to_string(),
    };

    let reply = client.post_json(paths::RESET_PASSWORD, &request).await?;

    assert::status_in(&reply, &[StatusCode::OK, StatusCode::BAD_REQUEST])?;
    if reply.status == StatusCode::OK {
        assert::json_has_key(&reply, "success")?;
    }

    Ok(Outcome::Passed)
}
