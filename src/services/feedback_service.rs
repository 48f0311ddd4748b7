// src/services/feedback_service.rs
use crate::{
    dates,
    error::{AppError, AppResult},
    models::feedback::{Feedback, UpdateFeedbackPayload},
};
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::SqlitePool;

/// Conteúdo sintético gravado quando uma falta é marcada sem feedback prévio.
pub const ABSENT_CLASS_CONTENT: &str = "Aluno faltou";

const COLUNAS: &str = "id, student_id, class_date, textbook, homework_completion, \
                       class_content, parent_message, is_absent, created_at";

pub async fn find_by_id(db_pool: &SqlitePool, feedback_id: i64) -> AppResult<Option<Feedback>> {
    let feedback =
        sqlx::query_as::<_, Feedback>(&format!("SELECT {COLUNAS} FROM feedbacks WHERE id = ?"))
            .bind(feedback_id)
            .fetch_optional(db_pool)
            .await?;
    Ok(feedback)
}

/// Feedbacks de um aluno, do mais recentemente criado para o mais antigo
/// (a vista de detalhe do aluno).
pub async fn find_by_student_recent_first(
    db_pool: &SqlitePool,
    student_id: i64,
) -> AppResult<Vec<Feedback>> {
    let feedbacks = sqlx::query_as::<_, Feedback>(&format!(
        "SELECT {COLUNAS} FROM feedbacks WHERE student_id = ? ORDER BY created_at DESC"
    ))
    .bind(student_id)
    .fetch_all(db_pool)
    .await?;
    Ok(feedbacks)
}

/// Feedbacks de um aluno, da aula mais recente para a mais antiga.
pub async fn find_by_student_by_class_date(
    db_pool: &SqlitePool,
    student_id: i64,
) -> AppResult<Vec<Feedback>> {
    let feedbacks = sqlx::query_as::<_, Feedback>(&format!(
        "SELECT {COLUNAS} FROM feedbacks WHERE student_id = ? ORDER BY class_date DESC"
    ))
    .bind(student_id)
    .fetch_all(db_pool)
    .await?;
    Ok(feedbacks)
}

/// O "Feedback Lookup" do calendário: o feedback de um aluno num dia de
/// calendário concreto, ignorando a hora. Se houver mais do que um (possível
/// via criação direta), ganha o de id mais baixo — a ordem natural da
/// tabela, tornada explícita para ser garantida e não dependente do motor.
pub async fn find_for_student_on_day(
    db_pool: &SqlitePool,
    student_id: i64,
    day: NaiveDate,
) -> AppResult<Option<Feedback>> {
    let feedback = sqlx::query_as::<_, Feedback>(&format!(
        "SELECT {COLUNAS} FROM feedbacks
         WHERE student_id = ? AND date(class_date) = ?
         ORDER BY id ASC
         LIMIT 1"
    ))
    .bind(student_id)
    .bind(day)
    .fetch_optional(db_pool)
    .await?;
    Ok(feedback)
}

pub async fn create(
    db_pool: &SqlitePool,
    student_id: i64,
    class_date: NaiveDateTime,
    textbook: Option<String>,
    homework_completion: Option<i64>,
    class_content: Option<String>,
    parent_message: Option<String>,
) -> AppResult<Feedback> {
    tracing::info!("Criando feedback para aluno {} em {}", student_id, class_date);

    let result = sqlx::query(
        "INSERT INTO feedbacks (student_id, class_date, textbook, homework_completion, class_content, parent_message, is_absent)
         VALUES (?, ?, ?, ?, ?, ?, 0)",
    )
    .bind(student_id)
    .bind(class_date)
    .bind(textbook)
    .bind(homework_completion)
    .bind(class_content)
    .bind(parent_message)
    .execute(db_pool)
    .await?;

    find_by_id(db_pool, result.last_insert_rowid())
        .await?
        .ok_or(AppError::InternalServerError)
}

/// Atualização parcial em sítio: campos ausentes mantêm o valor atual.
/// Uma class_date que não faça parse é ignorada (fica a existente) — a
/// mesma leniência do fluxo de criação.
pub async fn update(
    db_pool: &SqlitePool,
    feedback_id: i64,
    payload: &UpdateFeedbackPayload,
) -> AppResult<Feedback> {
    let current = find_by_id(db_pool, feedback_id).await?.ok_or_else(|| {
        AppError::NotFound(format!("Feedback {} não encontrado.", feedback_id))
    })?;

    let class_date = payload
        .class_date
        .as_deref()
        .and_then(dates::parse_datetime_flexible)
        .unwrap_or(current.class_date);
    let textbook = payload.textbook.clone().or(current.textbook);
    let homework_completion = payload.homework_completion.or(current.homework_completion);
    let class_content = payload.class_content.clone().or(current.class_content);
    let parent_message = payload.parent_message.clone().or(current.parent_message);
    let is_absent = payload.is_absent.unwrap_or(current.is_absent);

    sqlx::query(
        "UPDATE feedbacks
         SET class_date = ?, textbook = ?, homework_completion = ?, class_content = ?, parent_message = ?, is_absent = ?
         WHERE id = ?",
    )
    .bind(class_date)
    .bind(textbook)
    .bind(homework_completion)
    .bind(class_content)
    .bind(parent_message)
    .bind(is_absent)
    .bind(feedback_id)
    .execute(db_pool)
    .await?;

    find_by_id(db_pool, feedback_id)
        .await?
        .ok_or(AppError::InternalServerError)
}

pub async fn delete(db_pool: &SqlitePool, feedback_id: i64) -> AppResult<()> {
    let rows_affected = sqlx::query("DELETE FROM feedbacks WHERE id = ?")
        .bind(feedback_id)
        .execute(db_pool)
        .await?
        .rows_affected();

    if rows_affected == 0 {
        return Err(AppError::NotFound(format!(
            "Feedback {} não encontrado.",
            feedback_id
        )));
    }
    Ok(())
}

/// Marca uma falta. Se já existir feedback para (aluno, dia), liga apenas
/// o is_absent e devolve-o com os restantes campos intactos; se não, cria
/// um registo sintético de falta. O booleano devolvido indica se foi criado
/// um registo novo (o handler traduz para 201 vs 200).
pub async fn mark_absent(
    db_pool: &SqlitePool,
    student_id: i64,
    class_date: NaiveDateTime,
) -> AppResult<(Feedback, bool)> {
    match find_for_student_on_day(db_pool, student_id, class_date.date()).await? {
        Some(existing) => {
            sqlx::query("UPDATE feedbacks SET is_absent = 1 WHERE id = ?")
                .bind(existing.id)
                .execute(db_pool)
                .await?;
            let updated = find_by_id(db_pool, existing.id)
                .await?
                .ok_or(AppError::InternalServerError)?;
            tracing::info!(
                "Falta marcada no feedback existente {} (aluno {}).",
                updated.id,
                student_id
            );
            Ok((updated, false))
        }
        None => {
            let result = sqlx::query(
                "INSERT INTO feedbacks (student_id, class_date, class_content, parent_message, is_absent)
                 VALUES (?, ?, ?, '', 1)",
            )
            .bind(student_id)
            .bind(class_date)
            .bind(ABSENT_CLASS_CONTENT)
            .execute(db_pool)
            .await?;

            let created = find_by_id(db_pool, result.last_insert_rowid())
                .await?
                .ok_or(AppError::InternalServerError)?;
            tracing::info!(
                "Falta registada como novo feedback {} (aluno {}).",
                created.id,
                student_id
            );
            Ok((created, true))
        }
    }
}
