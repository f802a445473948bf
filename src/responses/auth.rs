use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key whose presence in a login reply means a second factor is pending
pub const TWO_FACTOR_REQUIRED: &str = "2fa_required";

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct Authenticated {
    pub token: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct TwoFactorChallenge {
    #[serde(rename = "2fa_required")]
    pub required: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub struct SuccessBody {
    pub success: bool,
    pub message: String,
}

/// What the suite reads out of a `POST /api/login` reply
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginReply {
    pub token: Option<String>,
    pub two_factor_required: bool,
}

impl LoginReply {
    /// Only the key matters for 2FA, not its value: `{"2fa_required": false}`
    /// still counts as a challenge.
    ///
    /// A numeric or boolean token is presented in its JSON text form; `null`,
    /// arrays and objects count as no token.
    pub fn from_json(body: &Value) -> Self {
        let token = match body.get("token") {
            Some(Value::String(token)) => Some(token.clone()),
            Some(scalar @ (Value::Number(_) | Value::Bool(_))) => Some(scalar.to_string()),
            _ => None,
        };

        Self {
            token,
            two_factor_required: body.get(TWO_FACTOR_REQUIRED).is_some(),
        }
    }
}
