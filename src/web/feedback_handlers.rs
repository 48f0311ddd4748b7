// src/web/feedback_handlers.rs
use crate::{
    dates,
    error::{AppError, AppResult},
    models::feedback::{MarkAbsentPayload, NewFeedbackPayload, UpdateFeedbackPayload},
    services::feedback_service,
    state::AppState,
};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

// POST /api/feedback
pub async fn create_feedback(
    State(state): State<AppState>,
    Json(payload): Json<NewFeedbackPayload>,
) -> AppResult<impl IntoResponse> {
    let student_id = payload
        .student_id
        .ok_or_else(|| AppError::Validation("O id do aluno é obrigatório.".to_string()))?;

    // Data em falta ou que não faz parse: usa o "agora" do relógio do
    // serviço, em vez de rejeitar o pedido
    let class_date = payload
        .class_date
        .as_deref()
        .and_then(dates::parse_datetime_flexible)
        .unwrap_or_else(|| state.config.now().naive_local());

    let feedback = feedback_service::create(
        &state.db_pool,
        student_id,
        class_date,
        payload.textbook,
        payload.homework_completion,
        payload.class_content,
        payload.parent_message,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(feedback)))
}

// PUT /api/feedback/{id} — atualização parcial em sítio
pub async fn update_feedback(
    State(state): State<AppState>,
    Path(feedback_id): Path<i64>,
    Json(payload): Json<UpdateFeedbackPayload>,
) -> AppResult<impl IntoResponse> {
    let feedback = feedback_service::update(&state.db_pool, feedback_id, &payload).await?;
    Ok(Json(feedback))
}

// DELETE /api/feedback/{id}
pub async fn delete_feedback(
    State(state): State<AppState>,
    Path(feedback_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    feedback_service::delete(&state.db_pool, feedback_id).await?;
    Ok(Json(json!({ "message": "Feedback removido com sucesso." })))
}

// GET /api/feedback/{student_id} — aqui o id é o id do ALUNO
pub async fn list_student_feedback(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let feedbacks =
        feedback_service::find_by_student_by_class_date(&state.db_pool, student_id).await?;
    Ok(Json(json!({ "feedbacks": feedbacks })))
}

// POST /api/feedback/mark-absent
pub async fn mark_absent(
    State(state): State<AppState>,
    Json(payload): Json<MarkAbsentPayload>,
) -> AppResult<impl IntoResponse> {
    let (student_id, raw_date) = match (payload.student_id, payload.class_date.as_deref()) {
        (Some(id), Some(raw)) if !raw.trim().is_empty() => (id, raw),
        _ => {
            return Err(AppError::Validation(
                "O id do aluno e a data da aula são obrigatórios.".to_string(),
            ))
        }
    };

    // Depois da validação, uma data que não faz parse já não é culpa do
    // formulário: reporta como falha genérica
    let class_date = dates::parse_datetime_flexible(raw_date).ok_or_else(|| {
        tracing::error!("Data de falta não parseável: {:?}", raw_date);
        AppError::InternalServerError
    })?;

    let (feedback, created) =
        feedback_service::mark_absent(&state.db_pool, student_id, class_date).await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(feedback)))
}
