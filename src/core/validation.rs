use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::profile::ProfilePayload;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_TITLE_LENGTH: usize = 3;
pub const MAX_HOURLY_RATE: f64 = 1000.0;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

fn has_min_length(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// Returns every rule the payload breaks, in field order. Empty means valid.
pub fn validate_profile(payload: &ProfilePayload) -> Vec<String> {
    let mut errors: Vec<String> = vec![];

    if !has_min_length(&payload.first_name, MIN_NAME_LENGTH) {
        errors.push(format!(
            "first name must be at least {} characters",
            MIN_NAME_LENGTH
        ));
    }
    if !has_min_length(&payload.last_name, MIN_NAME_LENGTH) {
        errors.push(format!(
            "last name must be at least {} characters",
            MIN_NAME_LENGTH
        ));
    }
    if !is_valid_email(&payload.email) {
        errors.push("email must be valid".to_string());
    }
    if !has_min_length(&payload.title, MIN_TITLE_LENGTH) {
        errors.push(format!(
            "title must be at least {} characters",
            MIN_TITLE_LENGTH
        ));
    }
    if let Some(rate) = payload.hourly_rate {
        if !(0.0..=MAX_HOURLY_RATE).contains(&rate) {
            errors.push(format!(
                "hourly rate must be between 0 and {}",
                MAX_HOURLY_RATE
            ));
        }
    }

    errors
}
