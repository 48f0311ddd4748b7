// src/services/schedule_service.rs
use crate::{
    error::{AppError, AppResult},
    models::schedule::{ScheduledClass, UpdateScheduledClassPayload},
};
use sqlx::SqlitePool;

const COLUNAS: &str =
    "id, student_id, day_of_week, start_time, duration_minutes, is_active, created_at";

/// Busca todas as aulas agendadas ativas.
pub async fn find_all_active(db_pool: &SqlitePool) -> AppResult<Vec<ScheduledClass>> {
    let classes = sqlx::query_as::<_, ScheduledClass>(&format!(
        "SELECT {COLUNAS} FROM scheduled_classes WHERE is_active = 1"
    ))
    .fetch_all(db_pool)
    .await?;
    Ok(classes)
}

/// Busca as aulas agendadas ativas de um aluno.
pub async fn find_active_by_student(
    db_pool: &SqlitePool,
    student_id: i64,
) -> AppResult<Vec<ScheduledClass>> {
    let classes = sqlx::query_as::<_, ScheduledClass>(&format!(
        "SELECT {COLUNAS} FROM scheduled_classes WHERE student_id = ? AND is_active = 1"
    ))
    .bind(student_id)
    .fetch_all(db_pool)
    .await?;
    Ok(classes)
}

/// Índice da agenda: as aulas ativas de um dia da semana (0 = Segunda ..
/// 6 = Domingo). Sem ORDER BY — a ordem é a ordem natural da tabela,
/// determinística para um estado fixo; quem quiser ordenar por hora ordena
/// do lado do cliente.
pub async fn find_active_by_weekday(
    db_pool: &SqlitePool,
    weekday: i64,
) -> AppResult<Vec<ScheduledClass>> {
    let classes = sqlx::query_as::<_, ScheduledClass>(&format!(
        "SELECT {COLUNAS} FROM scheduled_classes WHERE day_of_week = ? AND is_active = 1"
    ))
    .bind(weekday)
    .fetch_all(db_pool)
    .await?;
    Ok(classes)
}

pub async fn find_by_id(db_pool: &SqlitePool, id: i64) -> AppResult<Option<ScheduledClass>> {
    let sc = sqlx::query_as::<_, ScheduledClass>(&format!(
        "SELECT {COLUNAS} FROM scheduled_classes WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(db_pool)
    .await?;
    Ok(sc)
}

pub async fn create(
    db_pool: &SqlitePool,
    student_id: i64,
    day_of_week: i64,
    start_time: &str,
    duration_minutes: i64,
    is_active: bool,
) -> AppResult<ScheduledClass> {
    tracing::info!(
        "Agendando aula: aluno {} dia {} às {}",
        student_id,
        day_of_week,
        start_time
    );

    let result = sqlx::query(
        "INSERT INTO scheduled_classes (student_id, day_of_week, start_time, duration_minutes, is_active)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(student_id)
    .bind(day_of_week)
    .bind(start_time)
    .bind(duration_minutes)
    .bind(is_active)
    .execute(db_pool)
    .await?;

    find_by_id(db_pool, result.last_insert_rowid())
        .await?
        .ok_or(AppError::InternalServerError)
}

/// Atualização parcial: campos ausentes no payload mantêm o valor atual.
pub async fn update(
    db_pool: &SqlitePool,
    id: i64,
    payload: &UpdateScheduledClassPayload,
) -> AppResult<ScheduledClass> {
    let current = find_by_id(db_pool, id).await?.ok_or_else(|| {
        AppError::NotFound(format!("Aula agendada {} não encontrada.", id))
    })?;

    let student_id = payload.student_id.unwrap_or(current.student_id);
    let day_of_week = payload.day_of_week.unwrap_or(current.day_of_week);
    let start_time = payload.start_time.as_deref().unwrap_or(&current.start_time);
    let duration_minutes = payload.duration_minutes.unwrap_or(current.duration_minutes);
    let is_active = payload.is_active.unwrap_or(current.is_active);

    sqlx::query(
        "UPDATE scheduled_classes
         SET student_id = ?, day_of_week = ?, start_time = ?, duration_minutes = ?, is_active = ?
         WHERE id = ?",
    )
    .bind(student_id)
    .bind(day_of_week)
    .bind(start_time)
    .bind(duration_minutes)
    .bind(is_active)
    .bind(id)
    .execute(db_pool)
    .await?;

    find_by_id(db_pool, id)
        .await?
        .ok_or(AppError::InternalServerError)
}

/// Soft delete: marca a aula como inativa em vez de apagar a linha.
pub async fn deactivate(db_pool: &SqlitePool, id: i64) -> AppResult<()> {
    let rows_affected = sqlx::query("UPDATE scheduled_classes SET is_active = 0 WHERE id = ?")
        .bind(id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        return Err(AppError::NotFound(format!(
            "Aula agendada {} não encontrada.",
            id
        )));
    }
    tracing::info!("Aula agendada {} desativada.", id);
    Ok(())
}
