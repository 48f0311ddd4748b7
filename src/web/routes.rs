// src/web/routes.rs
use crate::{
    state::AppState,
    web::{calendar_handlers, feedback_handlers, schedule_handlers, student_handlers},
};
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    // --- Rotas de Alunos ---
    let student_routes = Router::new()
        .route(
            "/students",
            get(student_handlers::list_students).post(student_handlers::create_student),
        )
        .route(
            "/students/{id}",
            get(student_handlers::get_student).delete(student_handlers::delete_student),
        )
        .route(
            "/students/{id}/notes",
            put(student_handlers::update_student_notes),
        )
        // Singular mesmo ("/student/..."); o cliente web depende deste caminho
        .route(
            "/student/{id}/scheduled-classes",
            get(schedule_handlers::list_student_scheduled_classes),
        );

    // --- Rotas de Feedback ---
    // Atenção ao {id}: no GET é o id do ALUNO (lista os feedbacks dele),
    // no PUT/DELETE é o id do FEEDBACK. O cliente web já depende desta
    // sobreposição de caminhos.
    let feedback_routes = Router::new()
        .route("/feedback", post(feedback_handlers::create_feedback))
        .route("/feedback/mark-absent", post(feedback_handlers::mark_absent))
        .route(
            "/feedback/{id}",
            get(feedback_handlers::list_student_feedback)
                .put(feedback_handlers::update_feedback)
                .delete(feedback_handlers::delete_feedback),
        );

    // --- Rotas de Aulas Agendadas ---
    let schedule_routes = Router::new()
        .route(
            "/scheduled-classes",
            get(schedule_handlers::list_scheduled_classes)
                .post(schedule_handlers::create_scheduled_class),
        )
        .route(
            "/scheduled-classes/{id}",
            put(schedule_handlers::update_scheduled_class)
                .delete(schedule_handlers::delete_scheduled_class),
        );

    // --- Calendário (a vista derivada) ---
    let calendar_routes = Router::new().route(
        "/calendar/status",
        get(calendar_handlers::calendar_status),
    );

    // --- Router Final ---
    Router::new()
        .nest(
            "/api",
            Router::new()
                .merge(student_routes)
                .merge(feedback_routes)
                .merge(schedule_routes)
                .merge(calendar_routes),
        )
        .with_state(app_state)
}
