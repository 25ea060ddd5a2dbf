//! Handler for the POST dispatch endpoint.
//!
//! All mutations arrive at `POST /` as one JSON body with a `type`
//! discriminator. The body is parsed in two steps so the error split of
//! the contract holds: unparsable bytes are "Invalid JSON", a parsed body
//! with an unrecognized `type` is "Unknown type", and per-operation field
//! problems are reported by the services.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::api::dto::mutation::{
    AddCandidateRequest, BoostRequest, CommentRequest, UserRequest, VoteRequest,
};
use crate::domain::entities::{CandidateUpsert, UpsertOutcome};
use crate::domain::identity::or_guest;
use crate::error::AppError;
use crate::state::AppState;

/// Dispatches a mutation by its `type` field.
///
/// # Endpoint
///
/// `POST /`
///
/// # Responses
///
/// Success bodies are short plain-text messages ("Vote saved",
/// "Comment saved", "Success", "Boost applied: N votes", ...). Error
/// mapping follows the application error taxonomy.
pub async fn dispatch_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<String, AppError> {
    let data: Value =
        serde_json::from_slice(&body).map_err(|_| AppError::bad_request("Invalid JSON"))?;

    let kind = data
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    match kind.as_str() {
        "vote" => {
            let req: VoteRequest = parse(data)?;
            let rating = req.rating();
            let email = or_guest(req.user_email);
            let outcome = state.vote_service.cast(req.target_id, rating, email).await?;
            Ok(match outcome {
                UpsertOutcome::Created => "Vote saved".to_string(),
                UpsertOutcome::Updated => "Vote updated".to_string(),
            })
        }
        "comment" => {
            let req: CommentRequest = parse(data)?;
            let email = or_guest(req.user_email);
            let author = or_guest(req.user_name);
            state
                .comment_service
                .post(req.target_id, req.text, author, email)
                .await?;
            Ok("Comment saved".to_string())
        }
        "add_candidate" => {
            let req: AddCandidateRequest = parse(data)?;
            state
                .candidate_service
                .upsert(
                    req.auth.as_deref(),
                    CandidateUpsert {
                        id: req.id.unwrap_or_default(),
                        name: req.name.unwrap_or_default(),
                        photo: req.photo.unwrap_or_default(),
                        description: req.description.unwrap_or_default(),
                        tg: req.tg.unwrap_or_default(),
                        music: req.music.unwrap_or_default(),
                    },
                )
                .await?;
            Ok("Success".to_string())
        }
        "admin_boost" => {
            let req: BoostRequest = parse(data)?;
            let count = req.count();
            let inserted = state
                .vote_service
                .boost(req.auth.as_deref(), req.target_id, count)
                .await?;
            Ok(format!("Boost applied: {inserted} votes"))
        }
        "user" | "user_register" => {
            let req: UserRequest = parse(data)?;
            let outcome = state
                .user_service
                .register(req.resolved_email(), req.resolved_nickname())
                .await?;
            Ok(match outcome {
                UpsertOutcome::Created => "User saved".to_string(),
                UpsertOutcome::Updated => "User updated".to_string(),
            })
        }
        _ => Err(AppError::bad_request("Unknown type")),
    }
}

/// Responds to a bare (non-preflight) OPTIONS probe. Preflights proper are
/// answered by the CORS layer before the router sees them.
pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

/// Rejects unsupported verbs on `/`.
pub async fn method_not_allowed_handler() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response()
}

fn parse<T: serde::de::DeserializeOwned>(data: Value) -> Result<T, AppError> {
    serde_json::from_value(data).map_err(|_| AppError::bad_request("Bad request"))
}
