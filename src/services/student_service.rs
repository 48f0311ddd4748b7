// src/services/student_service.rs
use crate::{
    error::{AppError, AppResult},
    models::student::Student,
};
use sqlx::SqlitePool;

/// Busca todos os alunos, por ordem de criação.
pub async fn find_all(db_pool: &SqlitePool) -> AppResult<Vec<Student>> {
    let students = sqlx::query_as::<_, Student>(
        "SELECT id, name, contact, notes, created_at FROM students ORDER BY id ASC",
    )
    .fetch_all(db_pool)
    .await?;
    Ok(students)
}

/// Busca um aluno pelo seu ID.
pub async fn find_by_id(db_pool: &SqlitePool, student_id: i64) -> AppResult<Option<Student>> {
    let student = sqlx::query_as::<_, Student>(
        "SELECT id, name, contact, notes, created_at FROM students WHERE id = ?",
    )
    .bind(student_id)
    .fetch_optional(db_pool)
    .await?;
    Ok(student)
}

pub async fn create(
    db_pool: &SqlitePool,
    name: &str,
    contact: Option<&str>,
    notes: &str,
) -> AppResult<Student> {
    tracing::info!("Criando aluno: {}", name);

    let result = sqlx::query("INSERT INTO students (name, contact, notes) VALUES (?, ?, ?)")
        .bind(name)
        .bind(contact)
        .bind(notes)
        .execute(db_pool)
        .await?;

    let student = find_by_id(db_pool, result.last_insert_rowid())
        .await?
        .ok_or(AppError::InternalServerError)?;
    tracing::info!("✅ Aluno '{}' criado (id {}).", student.name, student.id);
    Ok(student)
}

/// Atualiza as notas livres de um aluno.
pub async fn update_notes(db_pool: &SqlitePool, student_id: i64, notes: &str) -> AppResult<()> {
    let rows_affected = sqlx::query("UPDATE students SET notes = ? WHERE id = ?")
        .bind(notes)
        .bind(student_id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        tracing::warn!("Aluno {} não encontrado ao atualizar notas.", student_id);
        return Err(AppError::NotFound(format!(
            "Aluno {} não encontrado.",
            student_id
        )));
    }
    Ok(())
}

/// Remove um aluno e tudo o que lhe pertence: primeiro os feedbacks e as
/// aulas agendadas, depois o próprio aluno, numa única transação. A cascata
/// vive aqui, na aplicação — o esquema não tem FKs com ON DELETE.
pub async fn delete_with_children(db_pool: &SqlitePool, student_id: i64) -> AppResult<()> {
    if find_by_id(db_pool, student_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "Aluno {} não encontrado.",
            student_id
        )));
    }

    let mut tx = db_pool.begin().await?;

    sqlx::query("DELETE FROM feedbacks WHERE student_id = ?")
        .bind(student_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM scheduled_classes WHERE student_id = ?")
        .bind(student_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM students WHERE id = ?")
        .bind(student_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    tracing::info!("🗑️ Aluno {} removido (com feedbacks e agenda).", student_id);
    Ok(())
}
