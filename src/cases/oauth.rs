use awc::http::StatusCode;

use super::{Outcome, paths};
use crate::assert;
use crate::client::AuthClient;
use crate::error::Result;

/// The endpoint either serves the consent flow itself or redirects to the
/// provider. Anything else, server errors included, fails.
pub async fn google_auth_endpoint(client: &AuthClient) -> Result<Outcome> {
    let reply = client.get(paths::GOOGLE_AUTH).await?;

    assert::status_in(&reply, &[StatusCode::OK, StatusCode::FOUND])?;

    if let Some(location) = &reply.location {
        tracing::debug!("Google auth redirects to {}", location);
    }

    Ok(Outcome::Passed)
}
