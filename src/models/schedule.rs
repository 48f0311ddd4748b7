// src/models/schedule.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Compromisso semanal recorrente de um aluno, independente de qualquer
/// data concreta. "Apagar" uma aula agendada é um soft delete
/// (is_active = false); todas as leituras filtram por is_active.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ScheduledClass {
    pub id: i64,
    pub student_id: i64,
    pub day_of_week: i64, // 0 = Segunda .. 6 = Domingo
    pub start_time: String, // "HH:MM"
    pub duration_minutes: i64,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

// Payload de criação (POST /api/scheduled-classes)
#[derive(Debug, Deserialize)]
pub struct NewScheduledClassPayload {
    pub student_id: Option<i64>,  // obrigatório
    pub day_of_week: Option<i64>, // obrigatório
    pub start_time: Option<String>, // obrigatório
    pub duration_minutes: Option<i64>, // por omissão 60
    pub is_active: Option<bool>,       // por omissão true
}

// Payload de atualização parcial (PUT /api/scheduled-classes/{id})
#[derive(Debug, Deserialize)]
pub struct UpdateScheduledClassPayload {
    pub student_id: Option<i64>,
    pub day_of_week: Option<i64>,
    pub start_time: Option<String>,
    pub duration_minutes: Option<i64>,
    pub is_active: Option<bool>,
}
