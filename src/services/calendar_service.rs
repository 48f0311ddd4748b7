// src/services/calendar_service.rs
//
// O núcleo do sistema: cruza a agenda semanal recorrente com os feedbacks
// datados e produz, dia a dia, o estado de cada aula (feedback escrito?
// falta?). Não guarda estado nenhum — só lê.

use crate::{
    error::{AppError, AppResult},
    models::calendar::{ClassStatus, DayEntry},
    services::{feedback_service, schedule_service, student_service},
};
use chrono::{Datelike, Duration, NaiveDate};
use sqlx::SqlitePool;

/// Constrói a vista de calendário para o intervalo SEMIABERTO [start, end):
/// o próprio `end` fica de fora. Um DayEntry por dia, sem buracos, mesmo
/// para dias sem aulas agendadas; ordem ascendente.
pub async fn build_calendar(
    db_pool: &SqlitePool,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<DayEntry>> {
    tracing::debug!("Construindo calendário para [{}, {})", start, end);

    let mut calendar = Vec::new();
    let mut day = start;

    // Loop dia a dia
    while day < end {
        // 0 = Segunda .. 6 = Domingo, a mesma convenção da coluna day_of_week
        let weekday = i64::from(day.weekday().num_days_from_monday());
        let scheduled = schedule_service::find_active_by_weekday(db_pool, weekday).await?;

        // A ordem das aulas dentro do dia é a ordem natural do índice da
        // agenda; não reordenamos por start_time aqui.
        let mut classes = Vec::with_capacity(scheduled.len());
        for sc in scheduled {
            // Aluno em falta = dados corrompidos; aborta a construção toda,
            // não é um erro recuperável por aula
            let student = student_service::find_by_id(db_pool, sc.student_id)
                .await?
                .ok_or_else(|| {
                    AppError::InconsistentData(format!(
                        "aula agendada {} refere o aluno {} que não existe",
                        sc.id, sc.student_id
                    ))
                })?;

            let feedback =
                feedback_service::find_for_student_on_day(db_pool, sc.student_id, day).await?;

            classes.push(ClassStatus {
                student_id: sc.student_id,
                student_name: student.name,
                start_time: sc.start_time,
                duration_minutes: sc.duration_minutes,
                feedback_written: feedback.is_some(),
                is_absent: feedback.as_ref().map(|f| f.is_absent).unwrap_or(false),
                feedback_id: feedback.map(|f| f.id),
            });
        }

        calendar.push(DayEntry { date: day, classes });
        day += Duration::days(1);
    }

    tracing::debug!("Calendário construído: {} dias.", calendar.len());
    Ok(calendar)
}
