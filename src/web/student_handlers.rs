// src/web/student_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::student::{NewStudentPayload, UpdateNotesPayload},
    services::{feedback_service, student_service},
    state::AppState,
};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

// GET /api/students
pub async fn list_students(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let students = student_service::find_all(&state.db_pool).await?;
    Ok(Json(json!({ "students": students })))
}

// POST /api/students
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<NewStudentPayload>,
) -> AppResult<impl IntoResponse> {
    let name = payload
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::Validation("O nome do aluno é obrigatório.".to_string()))?;

    let student = student_service::create(
        &state.db_pool,
        name,
        payload.contact.as_deref(),
        payload.notes.as_deref().unwrap_or(""),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(student)))
}

// GET /api/students/{id} — o aluno mais os seus feedbacks, do mais
// recentemente criado para o mais antigo
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let student = student_service::find_by_id(&state.db_pool, student_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Aluno {} não encontrado.", student_id)))?;

    let feedbacks =
        feedback_service::find_by_student_recent_first(&state.db_pool, student_id).await?;

    Ok(Json(json!({ "student": student, "feedbacks": feedbacks })))
}

// DELETE /api/students/{id} — cascata feita no serviço
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    student_service::delete_with_children(&state.db_pool, student_id).await?;
    Ok(Json(json!({ "message": "Aluno removido com sucesso." })))
}

// PUT /api/students/{id}/notes
pub async fn update_student_notes(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
    Json(payload): Json<UpdateNotesPayload>,
) -> AppResult<impl IntoResponse> {
    // 404 primeiro, mesmo que o payload venha sem 'notes'
    student_service::find_by_id(&state.db_pool, student_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Aluno {} não encontrado.", student_id)))?;

    if let Some(notes) = payload.notes {
        student_service::update_notes(&state.db_pool, student_id, &notes).await?;
    }

    Ok(Json(json!({ "message": "Notas do aluno atualizadas." })))
}
