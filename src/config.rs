use std::env;
use std::path::PathBuf;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: Option<PathBuf>,
    pub log_level: String,
    pub report_city: String,
    pub page_size: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenvy::dotenv();

        Ok(Self {
            data_path: env::var("DATA_PATH").ok().map(PathBuf::from),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            report_city: env::var("REPORT_CITY").unwrap_or_else(|_| "Kyiv".to_string()),
            page_size: parse_or_default("PAGE_SIZE", 100)?,
        })
    }
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|err| AppError::InvalidArgument(format!("invalid {key}: {err}"))),
        Err(_) => Ok(default),
    }
}
