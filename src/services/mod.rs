// src/services/mod.rs
pub mod calendar_service;
pub mod feedback_service;
pub mod schedule_service;
pub mod student_service;
