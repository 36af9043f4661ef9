//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use std::sync::OnceLock;
use chrono::{DateTime, Utc};
use regex::Regex;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";
const PHONE_PATTERN: &str = r"^\(\d{2}\) \d \d{4}-\d{4}$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern is valid"))
}

/// Format a timestamp the way the back office displays it (dd/mm/yyyy HH:MM)
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%d/%m/%Y %H:%M").to_string()
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Validate phone number format: `(XX) X XXXX-XXXX`
pub fn is_valid_phone(phone: &str) -> bool {
    phone_regex().is_match(phone)
}

/// Progressively mask raw phone input as `(XX) X XXXX-XXXX`
///
/// Non-digits are dropped and anything past the eleventh digit is ignored.
pub fn format_phone_number(value: &str) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).take(11).collect();
    if digits.is_empty() {
        return String::new();
    }

    match digits.len() {
        0..=2 => format!("({}", digits),
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!(
            "({}) {} {}-{}",
            &digits[..2],
            &digits[2..3],
            &digits[3..7],
            &digits[7..]
        ),
    }
}

/// Normalize whitespace in text
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trimmed optional text; blank input becomes `None`
pub fn non_blank(text: Option<&str>) -> Option<String> {
    text.map(str::trim).filter(|t| !t.is_empty()).map(str::to_string)
}

/// Generated avatar for clients registered without a picture
pub fn default_avatar_url(seed: &str) -> String {
    format!(
        "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
        urlencoding::encode(seed)
    )
}

/// Create a pagination info string
pub fn create_pagination_info(current_page: usize, total_pages: usize, total_items: usize) -> String {
    if total_pages <= 1 {
        format!("Total: {}", total_items)
    } else {
        format!("Page {} of {} (Total: {})", current_page, total_pages, total_items)
    }
}

/// Calculate pagination offset
pub fn calculate_offset(page: usize, page_size: usize) -> usize {
    page.saturating_sub(1) * page_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_phone_number_progressive() {
        assert_eq!(format_phone_number(""), "");
        assert_eq!(format_phone_number("1"), "(1");
        assert_eq!(format_phone_number("11"), "(11");
        assert_eq!(format_phone_number("119"), "(11) 9");
        assert_eq!(format_phone_number("1198765"), "(11) 98765");
        assert_eq!(format_phone_number("11987654321"), "(11) 9 8765-4321");
        assert_eq!(format_phone_number("(11) 9 8765-43219999"), "(11) 9 8765-4321");
    }

    #[test]
    fn test_formatted_phone_is_valid() {
        assert!(is_valid_phone(&format_phone_number("11987654321")));
        assert!(!is_valid_phone("11987654321"));
        assert!(!is_valid_phone("(11) 9 8765-432"));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("ana.souza@example.com.br"));
        assert!(!is_valid_email("ana@localhost"));
        assert!(!is_valid_email("not an email"));
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 0).unwrap();
        assert_eq!(format_timestamp(ts), "05/03/2024 14:07");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  hi ")), Some("hi".to_string()));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn test_default_avatar_url_encodes_seed() {
        assert_eq!(
            default_avatar_url("Ana Souza"),
            "https://api.dicebear.com/7.x/avataaars/svg?seed=Ana%20Souza"
        );
    }

    #[test]
    fn test_pagination_helpers() {
        assert_eq!(calculate_offset(1, 5), 0);
        assert_eq!(calculate_offset(3, 5), 10);
        assert_eq!(calculate_offset(0, 5), 0);
        assert_eq!(create_pagination_info(1, 1, 3), "Total: 3");
        assert_eq!(create_pagination_info(2, 4, 17), "Page 2 of 4 (Total: 17)");
    }
}
