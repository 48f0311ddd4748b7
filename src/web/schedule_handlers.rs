// src/web/schedule_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::schedule::{NewScheduledClassPayload, UpdateScheduledClassPayload},
    services::schedule_service,
    state::AppState,
};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

// GET /api/scheduled-classes — só as ativas
pub async fn list_scheduled_classes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let scheduled_classes = schedule_service::find_all_active(&state.db_pool).await?;
    Ok(Json(json!({ "scheduled_classes": scheduled_classes })))
}

// POST /api/scheduled-classes
pub async fn create_scheduled_class(
    State(state): State<AppState>,
    Json(payload): Json<NewScheduledClassPayload>,
) -> AppResult<impl IntoResponse> {
    let (student_id, day_of_week, start_time) = match (
        payload.student_id,
        payload.day_of_week,
        payload.start_time.as_deref(),
    ) {
        (Some(id), Some(dow), Some(time)) if !time.trim().is_empty() => (id, dow, time),
        _ => {
            return Err(AppError::Validation(
                "Aluno, dia da semana e hora de início são obrigatórios.".to_string(),
            ))
        }
    };

    let scheduled_class = schedule_service::create(
        &state.db_pool,
        student_id,
        day_of_week,
        start_time,
        payload.duration_minutes.unwrap_or(60),
        payload.is_active.unwrap_or(true),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(scheduled_class)))
}

// PUT /api/scheduled-classes/{id} — atualização parcial
pub async fn update_scheduled_class(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateScheduledClassPayload>,
) -> AppResult<impl IntoResponse> {
    let scheduled_class = schedule_service::update(&state.db_pool, id, &payload).await?;
    Ok(Json(scheduled_class))
}

// DELETE /api/scheduled-classes/{id} — soft delete
pub async fn delete_scheduled_class(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    schedule_service::deactivate(&state.db_pool, id).await?;
    Ok(Json(json!({ "message": "Aula agendada desativada com sucesso." })))
}

// GET /api/student/{student_id}/scheduled-classes
pub async fn list_student_scheduled_classes(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let scheduled_classes =
        schedule_service::find_active_by_student(&state.db_pool, student_id).await?;
    Ok(Json(json!({ "scheduled_classes": scheduled_classes })))
}
