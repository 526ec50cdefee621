// src/models/period.rs

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Mês/ano selecionado no painel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    #[validate(range(min = 1, max = 9999, message = "O ano deve estar entre 1 e 9999."))]
    #[schema(example = 2025)]
    pub year: i32,
    #[validate(range(min = 1, max = 12, message = "O mês deve estar entre 1 e 12."))]
    #[schema(example = 3)]
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Result<Self, validator::ValidationErrors> {
        let period = Self { year, month };
        period.validate()?;
        Ok(period)
    }

    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Avança (ou volta, se negativo) `increment` meses, virando o ano quando preciso.
    pub fn shift(self, increment: i32) -> Self {
        let index = self.year as i64 * 12 + (self.month as i64 - 1) + increment as i64;
        Self {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    pub fn previous(self) -> Self {
        self.shift(-1)
    }

    pub fn next(self) -> Self {
        self.shift(1)
    }

    pub fn month_name(&self) -> &'static str {
        self.month
            .checked_sub(1)
            .and_then(|index| MONTH_NAMES.get(index as usize))
            .copied()
            .unwrap_or("")
    }
}

// Período com os vizinhos para a navegação do painel
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PeriodView {
    pub year: i32,
    pub month: u32,
    #[schema(example = "March")]
    pub month_name: String,
    pub previous: Period,
    pub next: Period,
}

impl From<Period> for PeriodView {
    fn from(period: Period) -> Self {
        Self {
            year: period.year,
            month: period.month,
            month_name: period.month_name().to_string(),
            previous: period.previous(),
            next: period.next(),
        }
    }
}
