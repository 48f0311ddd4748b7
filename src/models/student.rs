// src/models/student.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Representa um aluno lido da tabela 'students'
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: i64, // SQLite INTEGER -> i64
    pub name: String,
    pub contact: Option<String>,
    pub notes: String,
    pub created_at: NaiveDateTime,
}

// Payload de criação (POST /api/students)
#[derive(Debug, Deserialize)]
pub struct NewStudentPayload {
    pub name: Option<String>, // obrigatório; validado no handler
    pub contact: Option<String>,
    pub notes: Option<String>,
}

// Payload de atualização das notas (PUT /api/students/{id}/notes)
#[derive(Debug, Deserialize)]
pub struct UpdateNotesPayload {
    pub notes: Option<String>,
}
