//! Checks applied to replies. Each returns an [`SuiteError::Assertion`]
//! naming the endpoint, what was expected and what came back.

use awc::http::StatusCode;
use serde_json::Value;

use crate::client::Reply;
use crate::error::{Result, SuiteError};

pub fn status_is(reply: &Reply, expected: StatusCode) -> Result<()> {
    status_in(reply, &[expected])
}

pub fn status_in(reply: &Reply, expected: &[StatusCode]) -> Result<()> {
    if expected.contains(&reply.status) {
        return Ok(());
    }

    let expected = expected
        .iter()
        .map(|status| status.as_u16().to_string())
        .collect::<Vec<_>>()
        .join(" or ");

    Err(SuiteError::assertion(
        format!("{} status", reply.endpoint),
        expected,
        reply.status.as_u16(),
    ))
}

pub fn text_contains(reply: &Reply, needle: &str) -> Result<()> {
    if reply.text().contains(needle) {
        return Ok(());
    }

    Err(SuiteError::assertion(
        format!("{} body", reply.endpoint),
        format!("text containing {:?}", needle),
        excerpt(&reply.text()),
    ))
}

/// Parse the reply as JSON and require `key` at the top level
pub fn json_has_key(reply: &Reply, key: &str) -> Result<Value> {
    let body = reply.json()?;

    if body.get(key).is_some() {
        return Ok(body);
    }

    Err(SuiteError::assertion(
        format!("{} body", reply.endpoint),
        format!("JSON with key {:?}", key),
        excerpt(&body.to_string()),
    ))
}

fn excerpt(text: &str) -> String {
    const LIMIT: usize = 120;

    match text.char_indices().nth(LIMIT) {
        Some((end, _)) => format!("{:?}...", &text[..end]),
        None => format!("{:?}", text),
    }
}
