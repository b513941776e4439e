//! Date (de)serialization helpers
//!
//! The backend stores dates as full ISO timestamps
//! (`2024-03-01T00:00:00.000Z`) but accepts plain `YYYY-MM-DD` on input.
//! Only the calendar date matters to this client.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serializer};

/// Parse `YYYY-MM-DD`, optionally followed by a time component
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

pub mod date {
    use super::*;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date '{}'", raw)))
    }
}

pub mod optional_date {
    use super::*;

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => serializer.serialize_some(&d.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(parse_date))
    }
}

/// Day-of-month fields (a card's statement due day)
///
/// Written as an integer. Read leniently: older records carry a full date
/// or a numeric string, and some have nothing at all. Anything that does not
/// yield a day in 1..=31 reads as 0 (unset) instead of failing the whole list.
pub mod day_of_month {
    use super::*;
    use serde_json::Value;

    pub fn serialize<S: Serializer>(day: &u8, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*day)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
        let day = match Value::deserialize(deserializer)? {
            Value::Number(n) => n
                .as_u64()
                .filter(|d| (1..=31).contains(d))
                .map_or(0, |d| d as u8),
            Value::String(raw) => day_from_text(&raw),
            _ => 0,
        };
        Ok(day)
    }

    fn day_from_text(raw: &str) -> u8 {
        match raw.trim().parse::<u8>() {
            Ok(day) if (1..=31).contains(&day) => day,
            Ok(_) => 0,
            Err(_) => parse_date(raw).map(|d| d.day() as u8).unwrap_or(0),
        }
    }
}
