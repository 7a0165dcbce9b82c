//! Book payload validation.
//!
//! Rules are checked per field, in field declaration order, and never
//! short-circuit across fields: a payload missing everything yields one
//! "required" violation per field.

use chrono::{Datelike, Utc};

use crate::models::book::BookPayload;

/// Maximum accepted length for title and author, in characters.
pub const MAX_TEXT_LENGTH: usize = 255;

/// Oldest accepted publication year. The upper bound is the current
/// calendar year at validation time.
pub const MIN_PUBLICATION_YEAR: i32 = 1000;

/// A single violated rule, tagged with the JSON field it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Check a raw payload against every field rule and collect all violations.
/// Pure function of the payload and the current date.
pub fn validate(payload: &BookPayload) -> Vec<Violation> {
    let mut violations = Vec::new();
    check_text(&mut violations, "title", payload.title.as_deref());
    check_text(&mut violations, "author", payload.author.as_deref());
    check_year(&mut violations, payload.publication_year);
    check_isbn(&mut violations, payload.isbn.as_deref());
    violations
}

fn check_text(violations: &mut Vec<Violation>, field: &'static str, value: Option<&str>) {
    match value {
        None => violations.push(Violation::new(field, format!("{field} is required"))),
        Some(s) if s.trim().is_empty() => {
            violations.push(Violation::new(field, format!("{field} must not be blank")))
        }
        Some(s) if s.chars().count() > MAX_TEXT_LENGTH => violations.push(Violation::new(
            field,
            format!("{field} must not exceed {MAX_TEXT_LENGTH} characters"),
        )),
        Some(_) => {}
    }
}

fn check_year(violations: &mut Vec<Violation>, value: Option<i32>) {
    let current_year = Utc::now().year();
    match value {
        None => violations.push(Violation::new(
            "publicationYear",
            "publicationYear is required",
        )),
        Some(y) if y < MIN_PUBLICATION_YEAR || y > current_year => {
            violations.push(Violation::new(
                "publicationYear",
                format!("publicationYear must be between {MIN_PUBLICATION_YEAR} and {current_year}"),
            ))
        }
        Some(_) => {}
    }
}

fn check_isbn(violations: &mut Vec<Violation>, value: Option<&str>) {
    match value {
        None => violations.push(Violation::new("isbn", "isbn is required")),
        Some(s) if s.trim().is_empty() => {
            violations.push(Violation::new("isbn", "isbn must not be blank"))
        }
        Some(s) if !is_valid_isbn(s) => violations.push(Violation::new(
            "isbn",
            "isbn must be a valid ISBN-10 or ISBN-13",
        )),
        Some(_) => {}
    }
}

/// ISBN-10 or ISBN-13 syntax and checksum. Hyphens and spaces are allowed
/// as separators and stripped before checking.
pub fn is_valid_isbn(raw: &str) -> bool {
    let digits: String = raw.chars().filter(|c| *c != '-' && *c != ' ').collect();
    match digits.len() {
        10 => is_valid_isbn10(&digits),
        13 => is_valid_isbn13(&digits),
        _ => false,
    }
}

fn is_valid_isbn10(s: &str) -> bool {
    let mut sum: u32 = 0;
    for (i, c) in s.chars().enumerate() {
        let value = match c {
            '0'..='9' => c as u32 - '0' as u32,
            // X is only valid as the check digit
            'X' | 'x' if i == 9 => 10,
            _ => return false,
        };
        sum += value * (10 - i as u32);
    }
    sum % 11 == 0
}

fn is_valid_isbn13(s: &str) -> bool {
    let mut sum: u32 = 0;
    for (i, c) in s.chars().enumerate() {
        let Some(value) = c.to_digit(10) else {
            return false;
        };
        sum += value * if i % 2 == 0 { 1 } else { 3 };
    }
    sum % 10 == 0
}
