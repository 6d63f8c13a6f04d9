use chrono::{Local, NaiveDate};

use crate::error::{AppError, AppResult};
use crate::models::PaymentId;

/// Date format printed on the document and stored on payments (`DD.MM.YYYY`)
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// 当前本地日期 (DD.MM.YYYY)
pub fn today() -> String {
    format_date(Local::now().date_naive())
}

/// Format a calendar date the way the document prints it
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `DD.MM.YYYY` date string
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map_err(|_| AppError::invalid_format(format!("Invalid date format: {}", date)))
}

/// Generate an opaque unique token for a new payment entry.
pub fn payment_id() -> PaymentId {
    uuid::Uuid::new_v4()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_pads_day_and_month() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "05.01.2024");
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("15.01.2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert!(parse_date("2024-01-15").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_today_is_parseable() {
        assert!(parse_date(&today()).is_ok());
    }

    #[test]
    fn test_payment_ids_are_unique() {
        assert_ne!(payment_id(), payment_id());
    }
}
