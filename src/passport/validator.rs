//! Passport validation policies
//!
//! Two policies:
//! - Presence: every required field is present, values ignored
//! - Strict: every required field is present and its value passes the
//!   field's format predicate
//!
//! Hair colour, eye colour and height match from the start of the value
//! and tolerate trailing characters. Passport ID is anchored at both ends.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::types::{FieldName, Record};

static HEIGHT: OnceLock<Regex> = OnceLock::new();
static HAIR_COLOUR: OnceLock<Regex> = OnceLock::new();
static EYE_COLOUR: OnceLock<Regex> = OnceLock::new();
static PASSPORT_ID: OnceLock<Regex> = OnceLock::new();

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static regex must compile")
}

fn height_pattern() -> &'static Regex {
    HEIGHT.get_or_init(|| compile(r"^([0-9]+)(cm|in)"))
}

fn hair_colour_pattern() -> &'static Regex {
    HAIR_COLOUR.get_or_init(|| compile(r"^#[0-9a-f]{6}"))
}

fn eye_colour_pattern() -> &'static Regex {
    EYE_COLOUR.get_or_init(|| compile(r"^(amb|blu|brn|gry|grn|hzl|oth)"))
}

fn passport_id_pattern() -> &'static Regex {
    PASSPORT_ID.get_or_init(|| compile(r"^[0-9]{9}$"))
}

/// Format predicate over a single field value
pub type FieldPredicate = fn(&str) -> bool;

/// Exactly four ASCII digits whose value lies in `[min, max]`.
pub fn validate_year(value: &str, min: u32, max: u32) -> bool {
    if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    value
        .parse::<u32>()
        .map(|year| (min..=max).contains(&year))
        .unwrap_or(false)
}

pub fn validate_birth_year(value: &str) -> bool {
    validate_year(value, 1920, 2002)
}

pub fn validate_issue_year(value: &str) -> bool {
    validate_year(value, 2010, 2020)
}

pub fn validate_expiration_year(value: &str) -> bool {
    validate_year(value, 2020, 2030)
}

/// `<digits>cm` in [150, 193] or `<digits>in` in [59, 76].
pub fn validate_height(value: &str) -> bool {
    let Some(caps) = height_pattern().captures(value) else {
        return false;
    };
    // Digit runs too long for u32 are out of range anyway
    let Ok(amount) = caps[1].parse::<u32>() else {
        return false;
    };
    match &caps[2] {
        "cm" => (150..=193).contains(&amount),
        "in" => (59..=76).contains(&amount),
        _ => false,
    }
}

pub fn validate_hair_colour(value: &str) -> bool {
    hair_colour_pattern().is_match(value)
}

pub fn validate_eye_colour(value: &str) -> bool {
    eye_colour_pattern().is_match(value)
}

pub fn validate_passport_id(value: &str) -> bool {
    passport_id_pattern().is_match(value)
}

fn accept_any(_value: &str) -> bool {
    true
}

/// Returns the format predicate for a field.
///
/// `cid` has no constraint and accepts anything.
pub fn field_predicate(field: FieldName) -> FieldPredicate {
    match field {
        FieldName::BirthYear => validate_birth_year,
        FieldName::IssueYear => validate_issue_year,
        FieldName::ExpirationYear => validate_expiration_year,
        FieldName::Height => validate_height,
        FieldName::HairColour => validate_hair_colour,
        FieldName::EyeColour => validate_eye_colour,
        FieldName::PassportId => validate_passport_id,
        FieldName::CountryId => accept_any,
    }
}

/// Why a record was not counted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    MissingField(FieldName),
    InvalidValue { field: FieldName, value: String },
}

impl Rejection {
    pub fn field(&self) -> FieldName {
        match self {
            Rejection::MissingField(field) => *field,
            Rejection::InvalidValue { field, .. } => *field,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::MissingField(_) => "missing",
            Rejection::InvalidValue { .. } => "invalid",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::MissingField(field) => write!(f, "field '{}' is missing", field),
            Rejection::InvalidValue { field, value } => {
                write!(f, "field '{}' has invalid value '{}'", field, value)
            }
        }
    }
}

/// Validity rule applied to every record of a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Required keys present; values ignored
    Presence,
    /// Required keys present and well-formed
    Strict,
}

impl Policy {
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Presence => "presence",
            Policy::Strict => "strict",
        }
    }

    /// Checks a record, reporting the first failing required field.
    ///
    /// Fields outside the required set are never inspected.
    pub fn check(&self, record: &Record) -> Result<(), Rejection> {
        for field in FieldName::REQUIRED {
            let value = record.field(field).ok_or(Rejection::MissingField(field))?;

            if *self == Policy::Strict && !field_predicate(field)(value) {
                return Err(Rejection::InvalidValue {
                    field,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn accepts(&self, record: &Record) -> bool {
        self.check(record).is_ok()
    }
}
