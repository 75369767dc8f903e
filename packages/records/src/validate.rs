//! Submit-time validation of a [`StudentDraft`].
//!
//! [`validate`] runs the checks in a fixed order and stops at the first
//! failure; the `Display` text of each [`ValidationError`] is the message
//! shown to the user. On success the draft is converted into the typed
//! [`StudentFields`] that gets written to the store. Values are kept exactly as
//! typed; only blank optional inputs collapse to `None`.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::draft::{Field, StudentDraft};
use crate::models::{Gender, StudentFields};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("First Name and Last Name are required.")]
    MissingName,
    #[error("Class and Section are required.")]
    MissingClassOrSection,
    #[error("Roll Number is required.")]
    MissingRollNumber,
    #[error("Contact Number must be a valid 10-digit number.")]
    InvalidContactNumber,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please select a valid gender.")]
    InvalidGender,
    #[error("{} must be a valid date.", .0.label())]
    InvalidDate(Field),
}

/// Exactly ten ASCII digits.
pub fn is_valid_contact_number(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}

/// `local@domain.tld` shape: non-whitespace, `@`, non-whitespace, `.`, non-whitespace.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn optional_text(value: &str) -> Option<String> {
    (!blank(value)).then(|| value.to_string())
}

fn optional_date(value: &str, field: Field) -> Result<Option<NaiveDate>, ValidationError> {
    if blank(value) {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ValidationError::InvalidDate(field))
}

/// Check a draft and convert it into a storable document body.
pub fn validate(draft: &StudentDraft) -> Result<StudentFields, ValidationError> {
    if blank(&draft.first_name) || blank(&draft.last_name) {
        return Err(ValidationError::MissingName);
    }
    if blank(&draft.class) || blank(&draft.section) {
        return Err(ValidationError::MissingClassOrSection);
    }
    if blank(&draft.roll_number) {
        return Err(ValidationError::MissingRollNumber);
    }
    if !is_valid_contact_number(&draft.contact_number) {
        return Err(ValidationError::InvalidContactNumber);
    }
    if !is_valid_email(&draft.email) {
        return Err(ValidationError::InvalidEmail);
    }

    let gender = if blank(&draft.gender) {
        None
    } else {
        Some(
            draft
                .gender
                .trim()
                .parse::<Gender>()
                .map_err(|_| ValidationError::InvalidGender)?,
        )
    };
    let dob = optional_date(&draft.dob, Field::Dob)?;
    let admission_date = optional_date(&draft.admission_date, Field::AdmissionDate)?;

    Ok(StudentFields {
        first_name: draft.first_name.clone(),
        last_name: draft.last_name.clone(),
        middle_name: optional_text(&draft.middle_name),
        gender,
        dob,
        contact_number: draft.contact_number.clone(),
        email: draft.email.clone(),
        address: optional_text(&draft.address),
        class: draft.class.clone(),
        section: draft.section.clone(),
        roll_number: draft.roll_number.clone(),
        admission_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> StudentDraft {
        StudentDraft {
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            class: "10".into(),
            section: "A".into(),
            roll_number: "5".into(),
            contact_number: "1234567890".into(),
            email: "asha@school.in".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_draft_converts() {
        let fields = validate(&valid_draft()).unwrap();
        assert_eq!(fields.first_name, "Asha");
        assert_eq!(fields.roll_number, "5");
        assert!(fields.middle_name.is_none());
        assert!(fields.dob.is_none());
    }

    #[test]
    fn test_blank_names_rejected() {
        let mut draft = valid_draft();
        draft.first_name = "   ".into();
        assert_eq!(validate(&draft), Err(ValidationError::MissingName));

        let mut draft = valid_draft();
        draft.last_name.clear();
        assert_eq!(validate(&draft), Err(ValidationError::MissingName));
    }

    #[test]
    fn test_checks_short_circuit_in_order() {
        // Everything is wrong: the name check reports first.
        assert_eq!(
            validate(&StudentDraft::default()),
            Err(ValidationError::MissingName)
        );

        let mut draft = valid_draft();
        draft.section = " ".into();
        draft.roll_number.clear();
        assert_eq!(validate(&draft), Err(ValidationError::MissingClassOrSection));

        let mut draft = valid_draft();
        draft.roll_number.clear();
        draft.email = "nope".into();
        assert_eq!(validate(&draft), Err(ValidationError::MissingRollNumber));
    }

    #[test]
    fn test_contact_number_must_be_ten_digits() {
        assert!(!is_valid_contact_number("12345"));
        assert!(is_valid_contact_number("1234567890"));
        assert!(!is_valid_contact_number("12345678901"));
        assert!(!is_valid_contact_number("123456789a"));
        assert!(!is_valid_contact_number("12345 7890"));

        let mut draft = valid_draft();
        draft.contact_number = "12345".into();
        assert_eq!(validate(&draft), Err(ValidationError::InvalidContactNumber));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.com"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));

        let mut draft = valid_draft();
        draft.email = "a@b".into();
        assert_eq!(validate(&draft), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_optional_fields_parse() {
        let mut draft = valid_draft();
        draft.gender = "Male".into();
        draft.dob = "2009-12-01".into();
        draft.address = "12 Hill Road".into();
        let fields = validate(&draft).unwrap();
        assert_eq!(fields.gender, Some(Gender::Male));
        assert_eq!(fields.dob, NaiveDate::from_ymd_opt(2009, 12, 1));
        assert_eq!(fields.address.as_deref(), Some("12 Hill Road"));

        draft.gender = "Robot".into();
        assert_eq!(validate(&draft), Err(ValidationError::InvalidGender));

        draft.gender.clear();
        draft.admission_date = "01/02/2020".into();
        assert_eq!(
            validate(&draft),
            Err(ValidationError::InvalidDate(Field::AdmissionDate))
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::InvalidContactNumber.to_string(),
            "Contact Number must be a valid 10-digit number."
        );
        assert_eq!(
            ValidationError::InvalidDate(Field::Dob).to_string(),
            "Date of Birth must be a valid date."
        );
    }
}
