// src/web/calendar_handlers.rs
use crate::{
    dates,
    error::AppResult,
    models::calendar::CalendarResponse,
    services::calendar_service,
    state::AppState,
};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

// GET /api/calendar/status?start_date=...&end_date=...
//
// Datas em falta ou inválidas NÃO são erro: o intervalo cai silenciosamente
// no mês corrente do relógio do serviço. Quem chamou só nota comparando as
// datas devolvidas com as que enviou.
pub async fn calendar_status(
    State(state): State<AppState>,
    Query(params): Query<CalendarQuery>,
) -> AppResult<Json<CalendarResponse>> {
    let (start, end) = dates::resolve_range(
        params.start_date.as_deref(),
        params.end_date.as_deref(),
        state.config.today(),
    );

    let calendar = calendar_service::build_calendar(&state.db_pool, start, end).await?;
    Ok(Json(CalendarResponse { calendar }))
}
