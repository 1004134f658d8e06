use super::error::MessageBody;
use super::AppState;
use crate::api::{CmdResult, HabitsApi};
use crate::error::{HabitzError, Result};
use crate::model::Habit;
use crate::store::SharedStore;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CompleteResponse {
    pub message: String,
    pub habit: Habit,
}

/// Store access is blocking file I/O, so it runs off the async workers.
async fn with_api<F>(state: &AppState, op: F) -> Result<CmdResult>
where
    F: FnOnce(&HabitsApi<SharedStore>) -> Result<CmdResult> + Send + 'static,
{
    let api = state.api.clone();
    tokio::task::spawn_blocking(move || op(&*api))
        .await
        .map_err(|e| HabitzError::Store(format!("store task failed: {e}")))?
}

fn first_affected(result: CmdResult) -> Result<Habit> {
    result
        .affected_habits
        .into_iter()
        .next()
        .ok_or_else(|| HabitzError::Store("command returned no habit".to_string()))
}

pub(crate) async fn list_habits_handler(State(state): State<AppState>) -> Result<Json<Vec<Habit>>> {
    let result = with_api(&state, |api| api.list_habits()).await?;
    Ok(Json(result.listed_habits))
}

pub(crate) async fn create_habit_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateHabitRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Habit>)> {
    let Json(request) = payload.map_err(|rejection| {
        HabitzError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    })?;
    let name = request.name.unwrap_or_default();
    let description = request.description;

    let result = with_api(&state, move |api| {
        api.create_habit(&name, description.as_deref())
    })
    .await?;
    Ok((StatusCode::CREATED, Json(first_affected(result)?)))
}

pub(crate) async fn delete_habit_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>> {
    let result = with_api(&state, move |api| api.delete_habit(&id)).await?;
    let message = result.headline().unwrap_or("Habit deleted").to_string();
    Ok(Json(MessageBody::new(message)))
}

pub(crate) async fn complete_habit_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CompleteResponse>> {
    let result = with_api(&state, move |api| api.complete_habit(&id)).await?;
    let message = result.headline().unwrap_or_default().to_string();
    Ok(Json(CompleteResponse {
        message,
        habit: first_affected(result)?,
    }))
}
