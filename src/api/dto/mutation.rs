//! Request payloads for the POST dispatch endpoint.
//!
//! The wire format is inherited from the existing frontend: one JSON body
//! with a `type` discriminator and loosely-typed fields. Numeric fields
//! arrive as JSON numbers or as numeric strings, so `rating` and `count`
//! are kept as raw [`Value`]s and coerced explicitly. All fields are
//! optional at the serde level; presence rules are enforced by the
//! services so the error messages match the contract.

use serde::Deserialize;
use serde_json::Value;

/// `{"type": "vote"}` payload.
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    #[serde(default, rename = "userEmail")]
    pub user_email: Option<String>,
    #[serde(default, rename = "targetId")]
    pub target_id: Option<String>,
    #[serde(default)]
    pub rating: Value,
}

impl VoteRequest {
    /// Coerces the rating to a finite number, accepting `4.5` and `"4.5"`.
    pub fn rating(&self) -> Option<f64> {
        coerce_f64(&self.rating)
    }
}

/// `{"type": "comment"}` payload.
#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    #[serde(default, rename = "userEmail")]
    pub user_email: Option<String>,
    #[serde(default, rename = "targetId")]
    pub target_id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "userName")]
    pub user_name: Option<String>,
}

/// `{"type": "add_candidate"}` payload (admin).
#[derive(Debug, Deserialize)]
pub struct AddCandidateRequest {
    #[serde(default)]
    pub auth: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tg: Option<String>,
    #[serde(default)]
    pub music: Option<String>,
}

/// `{"type": "admin_boost"}` payload (admin).
#[derive(Debug, Deserialize)]
pub struct BoostRequest {
    #[serde(default)]
    pub auth: Option<String>,
    #[serde(default, rename = "targetId")]
    pub target_id: Option<String>,
    #[serde(default)]
    pub count: Value,
}

impl BoostRequest {
    /// Coerces the count to an integer, accepting `3` and `"3"`.
    pub fn count(&self) -> Option<i64> {
        coerce_i64(&self.count)
    }
}

/// `{"type": "user" | "user_register"}` payload.
///
/// Two spellings are accepted for each field; the first non-empty wins.
#[derive(Debug, Deserialize)]
pub struct UserRequest {
    #[serde(default, rename = "userEmail")]
    pub user_email: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default, rename = "userName")]
    pub user_name: Option<String>,
}

impl UserRequest {
    pub fn resolved_email(&self) -> Option<String> {
        first_non_empty(&self.user_email, &self.email)
    }

    pub fn resolved_nickname(&self) -> Option<String> {
        first_non_empty(&self.nickname, &self.user_name)
    }
}

fn first_non_empty(a: &Option<String>, b: &Option<String>) -> Option<String> {
    a.as_deref()
        .filter(|v| !v.is_empty())
        .or(b.as_deref().filter(|v| !v.is_empty()))
        .map(str::to_string)
}

fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|v| v.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|v| v.trunc() as i64))
        }
        _ => None,
    }
}
