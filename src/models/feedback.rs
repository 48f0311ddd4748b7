// src/models/feedback.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Registo de uma aula dada (ou de uma falta) lido da tabela 'feedbacks'.
/// `class_date` é a data/hora da aula; para efeitos de calendário só o
/// componente de dia interessa.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Feedback {
    pub id: i64,
    pub student_id: i64,
    pub class_date: NaiveDateTime,
    pub textbook: Option<String>,
    pub homework_completion: Option<i64>, // percentagem 0-100, não validada
    pub class_content: Option<String>,
    pub parent_message: Option<String>,
    pub is_absent: bool,
    pub created_at: NaiveDateTime,
}

// Payload de criação (POST /api/feedback)
#[derive(Debug, Deserialize)]
pub struct NewFeedbackPayload {
    pub student_id: Option<i64>, // obrigatório; validado no handler
    pub class_date: Option<String>,
    pub textbook: Option<String>,
    pub homework_completion: Option<i64>,
    pub class_content: Option<String>,
    pub parent_message: Option<String>,
}

// Payload de atualização parcial (PUT /api/feedback/{id}) — só os campos
// presentes no JSON são alterados
#[derive(Debug, Deserialize)]
pub struct UpdateFeedbackPayload {
    pub class_date: Option<String>,
    pub textbook: Option<String>,
    pub homework_completion: Option<i64>,
    pub class_content: Option<String>,
    pub parent_message: Option<String>,
    pub is_absent: Option<bool>,
}

// Payload do fluxo de falta (POST /api/feedback/mark-absent)
#[derive(Debug, Deserialize)]
pub struct MarkAbsentPayload {
    pub student_id: Option<i64>,
    pub class_date: Option<String>,
}
