// src/config.rs
use crate::error::AppResult;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use std::env;

/// Configuração do processo, construída uma única vez no arranque e passada
/// explicitamente (via AppState) a quem precisa dela. Nada aqui é global.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub listen_port: u16,
    /// Fuso horário fixo do serviço. Todas as decisões de "que dia é hoje"
    /// (fallback do calendário, data por omissão de um feedback) usam este
    /// offset, nunca o relógio do caller.
    pub utc_offset: FixedOffset,
}

impl AppConfig {
    /// Lê a configuração do ambiente (.env já carregado pelo main).
    /// Só DATABASE_URL é obrigatória; o resto tem valores por omissão.
    pub fn from_env() -> AppResult<Self> {
        let database_url = env::var("DATABASE_URL")?;

        let listen_port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        // APP_UTC_OFFSET no formato "+HH:MM" / "-HH:MM". Por omissão +09:00,
        // o fuso onde a explicadora dá as aulas.
        let utc_offset = env::var("APP_UTC_OFFSET")
            .ok()
            .and_then(|s| parse_utc_offset(&s))
            .unwrap_or_else(default_utc_offset);

        Ok(AppConfig {
            database_url,
            listen_port,
            utc_offset,
        })
    }

    /// Relógio do serviço: o instante atual no fuso configurado.
    pub fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.utc_offset)
    }

    /// O dia de hoje no fuso configurado.
    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

fn default_utc_offset() -> FixedOffset {
    // east_opt só falha fora de ±24h; 9h está sempre dentro do limite
    FixedOffset::east_opt(9 * 3600).expect("offset +09:00 válido")
}

/// Aceita "+HH:MM" ou "-HH:MM". Qualquer outra coisa resulta em None
/// (e o chamador fica com o valor por omissão).
fn parse_utc_offset(raw: &str) -> Option<FixedOffset> {
    let s = raw.trim();
    let (sign, rest) = if let Some(rest) = s.strip_prefix('+') {
        (1i32, rest)
    } else if let Some(rest) = s.strip_prefix('-') {
        (-1i32, rest)
    } else {
        return None;
    };
    let (hh, mm) = rest.split_once(':')?;
    let hours: i32 = hh.parse().ok()?;
    let minutes: i32 = mm.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_offset_aceita_formatos_com_sinal() {
        assert_eq!(
            parse_utc_offset("+09:00"),
            Some(FixedOffset::east_opt(9 * 3600).unwrap())
        );
        assert_eq!(
            parse_utc_offset("-03:30"),
            Some(FixedOffset::east_opt(-(3 * 3600 + 30 * 60)).unwrap())
        );
    }

    #[test]
    fn parse_offset_rejeita_lixo() {
        assert_eq!(parse_utc_offset("09:00"), None);
        assert_eq!(parse_utc_offset("+9"), None);
        assert_eq!(parse_utc_offset("+99:00"), None);
        assert_eq!(parse_utc_offset(""), None);
    }
}
