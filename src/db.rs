// src/db.rs
use crate::{config::AppConfig, error::AppResult};
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration; // Usar std::time::Duration aqui

// Migrações embebidas no binário; também usadas pelos testes
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn create_db_pool(config: &AppConfig) -> AppResult<SqlitePool> {
    tracing::info!("Ligando à base de dados: {}", config.database_url);

    // Opções de conexão (criar se não existir, timeout)
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    // Cria o pool (conjunto de conexões reutilizáveis)
    let pool = SqlitePoolOptions::new()
        .max_connections(5) // Número máximo de conexões simultâneas
        .connect_with(options)
        .await?; // Conecta e retorna erro se falhar

    tracing::info!("Executando migrações da base de dados...");
    MIGRATOR.run(&pool).await?;
    tracing::info!("Migrações concluídas.");

    Ok(pool)
}

/// Pool em memória com o esquema aplicado, para os testes.
#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1) // ":memory:" é uma DB por conexão
        .connect("sqlite::memory:")
        .await
        .expect("pool em memória");
    MIGRATOR.run(&pool).await.expect("migrações nos testes");
    pool
}
