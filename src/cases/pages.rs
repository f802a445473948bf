use awc::http::StatusCode;

use super::{Outcome, paths};
use crate::assert;
use crate::client::AuthClient;
use crate::error::Result;

pub const PRODUCT_TITLE: &str = "Secure Password Manager";
pub const SIGN_IN: &str = "Sign in";
pub const REGISTER_TITLE: &str = "Create your Vault";
pub const SIGN_UP: &str = "Sign up";

pub async fn login_page_loads(client: &AuthClient) -> Result<Outcome> {
    let reply = client.get(paths::LOGIN_PAGE).await?;

    assert::status_is(&reply, StatusCode::OK)?;
    assert::text_contains(&reply, PRODUCT_TITLE)?;
    assert::text_contains(&reply, SIGN_IN)?;

    Ok(Outcome::Passed)
}

pub async fn register_page_loads(client: &AuthClient) -> Result<Outcome> {
    let reply = client.get(paths::REGISTER_PAGE).await?;

    assert::status_is(&reply, StatusCode::OK)?;
    assert::text_contains(&reply, REGISTER_TITLE)?;
    assert::text_contains(&reply, SIGN_UP)?;

    Ok(Outcome::Passed)
}
