// src/common/lenient.rs

// Desserializadores tolerantes para os registros que vêm da API de backend.
// Um campo ausente, nulo ou com tipo errado vira `None` (ou lista vazia)
// em vez de derrubar a desserialização do registro inteiro.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

// --- Conversões a partir de um Value ---

pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

// 2^63 é exato em f64; todo inteiro em [-2^63, 2^63) cabe num i64
const I64_FLOAT_BOUND: f64 = 9_223_372_036_854_775_808.0;

pub fn integer_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            // 3.0 é aceito, 2.5 não
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && (-I64_FLOAT_BOUND..I64_FLOAT_BOUND).contains(f))
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn string_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        // IDs numéricos (ex: `id: 7`) são tratados como texto
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub fn date_from_value(value: &Value) -> Option<NaiveDate> {
    let raw = value.as_str()?.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        // Dia no fuso em que o timestamp foi escrito
        return Some(dt.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Registro a partir de um objeto JSON. Arrays não são aceitos, mesmo que
/// o serde consiga mapeá-los por posição.
pub fn record_from_value<T: DeserializeOwned>(value: Value) -> Option<T> {
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value).ok()
}

/// Mantém apenas os elementos da lista que são registros válidos de `T`.
/// Qualquer coisa que não seja um array vira lista vazia.
pub fn list_from_value<T: DeserializeOwned>(value: Value) -> Vec<T> {
    match value {
        Value::Array(elements) => elements
            .into_iter()
            .filter_map(record_from_value)
            .collect(),
        _ => Vec::new(),
    }
}

// --- Funções para `#[serde(deserialize_with = ...)]` ---
// Sempre usadas junto com `#[serde(default)]`, para que campos ausentes virem None.

pub fn decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(decimal_from_value))
}

pub fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(integer_from_value))
}

pub fn count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(integer_from_value)
        .and_then(|n| u64::try_from(n).ok()))
}

pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(string_from_value))
}

pub fn date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(date_from_value))
}

pub fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(record_from_value))
}

pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(list_from_value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn d(raw: &str) -> Decimal {
        raw.parse().unwrap()
    }

    #[test]
    fn decimal_accepts_numbers_and_numeric_strings() {
        assert_eq!(decimal_from_value(&json!(10)), Some(d("10")));
        assert_eq!(decimal_from_value(&json!(12.5)), Some(d("12.5")));
        assert_eq!(decimal_from_value(&json!(" 1500.75 ")), Some(d("1500.75")));
        assert_eq!(decimal_from_value(&json!("1e3")), Some(d("1000")));
    }

    #[test]
    fn decimal_rejects_garbage() {
        assert_eq!(decimal_from_value(&json!("abc")), None);
        assert_eq!(decimal_from_value(&json!("")), None);
        assert_eq!(decimal_from_value(&json!(null)), None);
        assert_eq!(decimal_from_value(&json!({"amount": 1})), None);
    }

    #[test]
    fn integer_accepts_integral_floats_only() {
        assert_eq!(integer_from_value(&json!(3)), Some(3));
        assert_eq!(integer_from_value(&json!(3.0)), Some(3));
        assert_eq!(integer_from_value(&json!("4")), Some(4));
        assert_eq!(integer_from_value(&json!(2.5)), None);
        assert_eq!(integer_from_value(&json!(true)), None);
    }

    #[test]
    fn integer_rejects_floats_outside_i64() {
        assert_eq!(integer_from_value(&json!(9.3e18)), None);
        assert_eq!(integer_from_value(&json!(9_223_372_036_854_775_808.0)), None);
        assert_eq!(integer_from_value(&json!(-9.3e18)), None);
        assert_eq!(
            integer_from_value(&json!(9_223_372_036_854_774_784.0)),
            Some(9_223_372_036_854_774_784)
        );
        assert_eq!(integer_from_value(&json!(-9_223_372_036_854_775_808.0)), Some(i64::MIN));
    }

    #[test]
    fn dates_in_common_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(date_from_value(&json!("2025-03-14")), Some(expected));
        assert_eq!(date_from_value(&json!("2025-03-14T09:30:00")), Some(expected));
        assert_eq!(date_from_value(&json!("2025-03-14 09:30:00.123")), Some(expected));
        assert_eq!(date_from_value(&json!("2025-03-14T23:30:00-03:00")), Some(expected));
        assert_eq!(date_from_value(&json!("2025-03-14T10:00:00.000Z")), Some(expected));
        assert_eq!(date_from_value(&json!("14/03/2025")), None);
        assert_eq!(date_from_value(&json!(20250314)), None);
    }

    #[test]
    fn list_drops_elements_that_do_not_fit() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Row {
            id: i64,
        }

        let rows: Vec<Row> = list_from_value(json!([{"id": 1}, null, "x", [3], {"id": 2}]));
        assert_eq!(rows, vec![Row { id: 1 }, Row { id: 2 }]);

        let rows: Vec<Row> = list_from_value(json!({"id": 1}));
        assert!(rows.is_empty());
    }
}
