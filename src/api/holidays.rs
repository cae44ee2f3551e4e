//! ArgentinaDatos public-holiday client.
//!
//! `GET {base}/{year}` answers with
//! `[{"fecha": "2025-01-01", "tipo": "inamovible", "nombre": "Año nuevo"}, ...]`
//! and needs no authentication.

use super::{ApiError, HolidayCalendar};
use crate::libs::{config::Config, http::Http};
use chrono::NaiveDate;
use reqwest::header::HeaderMap;
use serde::Deserialize;

const NO_QUERY: &[(&str, &str)] = &[];

#[derive(Debug, Deserialize)]
struct Feriado {
    fecha: String,
    #[serde(default)]
    nombre: String,
}

#[derive(Debug, Clone)]
pub struct ArgentinaHolidays {
    http: Http,
    base_url: String,
}

impl ArgentinaHolidays {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Ok(Self {
            http: Http::new(config.http_timeout, config.http_attempts, HeaderMap::new())?,
            base_url: config.holidays_url.clone(),
        })
    }
}

impl HolidayCalendar for ArgentinaHolidays {
    async fn holidays(&self, year: i32) -> Result<Vec<(NaiveDate, String)>, ApiError> {
        let url = format!("{}/{}", self.base_url, year);
        let feriados: Vec<Feriado> = self.http.get_json(&url, NO_QUERY).await?;

        feriados
            .into_iter()
            .map(|feriado| {
                NaiveDate::parse_from_str(&feriado.fecha, "%Y-%m-%d")
                    .map(|date| (date, feriado.nombre))
                    .map_err(|_| ApiError::Decode {
                        url: url.clone(),
                        reason: format!("invalid holiday date '{}'", feriado.fecha),
                    })
            })
            .collect()
    }
}
