// src/models/calendar.rs
use chrono::NaiveDate;
use serde::Serialize;

// --- Vista derivada do calendário (GET /api/calendar/status) ---
// Estes structs são o contrato do endpoint; os nomes dos campos são os
// nomes que vão para o JSON.

/// Estado de uma aula agendada num dia concreto: houve feedback? falta?
#[derive(Debug, Clone, Serialize)]
pub struct ClassStatus {
    pub student_id: i64,
    pub student_name: String,
    pub start_time: String,
    pub duration_minutes: i64,
    pub feedback_written: bool,
    pub is_absent: bool,
    pub feedback_id: Option<i64>, // null no JSON quando não há feedback
}

/// Um dia do intervalo pedido. `classes` pode ser vazio — dias sem aulas
/// agendadas aparecem na mesma.
#[derive(Debug, Clone, Serialize)]
pub struct DayEntry {
    pub date: NaiveDate, // serializa como "YYYY-MM-DD"
    pub classes: Vec<ClassStatus>,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub calendar: Vec<DayEntry>,
}
