// src/error.rs
use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro na base de dados: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Erro de variável de ambiente: {0}")]
    EnvVarError(#[from] std::env::VarError),

    // Recurso referenciado por id que não existe (aluno, feedback, aula agendada)
    #[error("{0}")]
    NotFound(String),

    // Pedido sem campos obrigatórios; nada é escrito na DB
    #[error("{0}")]
    Validation(String),

    // Estado inválido encontrado durante uma leitura derivada
    // (ex: aula agendada cujo aluno já não existe)
    #[error("Dados inconsistentes: {0}")]
    InconsistentData(String),

    #[error("Erro interno inesperado")]
    InternalServerError,
}

// Como converter AppError numa resposta HTTP (JSON: { "error": mensagem })
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Loga o erro detalhado no servidor
        tracing::error!("Erro processado: {:?}", self);

        let (status, user_message) = match self {
            AppError::SqlxError(_) | AppError::SqlxMigrateError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro ao aceder aos dados.".to_string(),
            ),
            AppError::EnvVarError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Erro de configuração.".to_string(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::InconsistentData(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Dados inconsistentes na base de dados.".to_string(),
            ),
            AppError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Ocorreu um erro inesperado.".to_string(),
            ),
        };

        (status, Json(serde_json::json!({ "error": user_message }))).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
