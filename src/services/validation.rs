//! Registration input rules enforced by the auth API.
//!
//! The browser only checks email shape on login; everything posted to
//! `/register` is validated here and rejected with a readable message.

use authflow::RegistrationForm;
use time::Date;
use time::macros::format_description;

pub const USERNAME_LEN: std::ops::RangeInclusive<usize> = 6..=16;
pub const PASSWORD_LEN: std::ops::RangeInclusive<usize> = 6..=16;
pub const GENDERS: [&str; 3] = ["Homme", "Femme", "autre"];

/// Check a registration payload, returning the first violated rule.
///
/// # Errors
///
/// Returns the user-facing message for the first rule that fails.
pub fn validate_registration(form: &RegistrationForm) -> Result<(), String> {
    if !USERNAME_LEN.contains(&form.username.chars().count()) {
        return Err("Username must be between 6 and 16 characters".to_owned());
    }
    if !PASSWORD_LEN.contains(&form.password.chars().count()) {
        return Err("Password must be between 6 and 16 characters long".to_owned());
    }
    if !is_backend_email(&form.email) {
        return Err("invalid email format".to_owned());
    }
    if !form.age.is_empty() && form.age.trim().parse::<u16>().is_err() {
        return Err("age must be a number".to_owned());
    }
    if !form.date_of_birth.is_empty() && !is_iso_date(&form.date_of_birth) {
        return Err("invalid date format".to_owned());
    }
    if !form.gender.is_empty() && !GENDERS.contains(&form.gender.as_str()) {
        return Err("Gender must be 'Homme', 'Femme' or 'autre'.".to_owned());
    }
    Ok(())
}

/// Looser check than the browser's: an `@` that is not first, and a final
/// `.` that follows it by at least one character and is not last.
#[must_use]
pub fn is_backend_email(email: &str) -> bool {
    let (Some(at), Some(dot)) = (email.find('@'), email.rfind('.')) else {
        return false;
    };
    at > 0 && dot > at + 1 && dot + 1 < email.len()
}

/// `YYYY-MM-DD` naming a day that exists on the calendar.
fn is_iso_date(raw: &str) -> bool {
    Date::parse(raw, format_description!("[year]-[month]-[day]")).is_ok()
}

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;
