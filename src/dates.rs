// src/dates.rs
//
// Todo o parsing de datas vindas de fora passa por aqui, em vez de ficar
// repetido em cada handler. Formatos aceites:
//   - RFC 3339 com "Z" ou offset ("2025-03-19T15:00:00Z", "...+09:00")
//   - datetime ISO sem offset ("2025-03-19T15:00:00")
//   - data simples ("2025-03-19")
// O componente de offset, quando presente, é descartado: interessa o
// dia/hora tal como o caller o escreveu, não a conversão para outro fuso.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};

pub fn parse_datetime_flexible(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_time(NaiveTime::MIN));
    }
    None
}

/// Intervalo [primeiro dia do mês corrente, primeiro dia do mês seguinte).
/// Dezembro avança para Janeiro do ano seguinte.
pub fn current_month_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
    let end = if today.month() < 12 {
        NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
    } else {
        NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
    }
    .unwrap_or(start);
    (start, end)
}

/// Resolve o intervalo do calendário a partir dos query params.
///
/// Se AMBAS as datas existirem e fizerem parse, usa-as (truncadas ao
/// componente de dia — um datetime "2025-03-19T13:00" conta como o dia
/// 2025-03-19). Caso contrário cai SILENCIOSAMENTE no mês corrente de
/// `today` — política deliberada: input inválido não é um erro para este
/// endpoint.
pub fn resolve_range(
    start: Option<&str>,
    end: Option<&str>,
    today: NaiveDate,
) -> (NaiveDate, NaiveDate) {
    let start_dt = start.and_then(parse_datetime_flexible);
    let end_dt = end.and_then(parse_datetime_flexible);
    match (start_dt, end_dt) {
        (Some(s), Some(e)) => (s.date(), e.date()),
        _ => current_month_range(today),
    }
}
