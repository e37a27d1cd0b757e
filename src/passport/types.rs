//! Passport data model
//!
//! Known fields:
//! - byr: Birth Year
//! - iyr: Issue Year
//! - eyr: Expiration Year
//! - hgt: Height
//! - hcl: Hair Colour
//! - ecl: Eye Colour
//! - pid: Passport ID
//! - cid: Country ID (never required)

use std::collections::HashMap;
use std::fmt;

/// The eight known passport keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    BirthYear,
    IssueYear,
    ExpirationYear,
    Height,
    HairColour,
    EyeColour,
    PassportId,
    CountryId,
}

impl FieldName {
    /// Required fields in the order they are checked
    pub const REQUIRED: [FieldName; 7] = [
        FieldName::BirthYear,
        FieldName::IssueYear,
        FieldName::ExpirationYear,
        FieldName::Height,
        FieldName::HairColour,
        FieldName::EyeColour,
        FieldName::PassportId,
    ];

    /// Returns the key as it appears in the batch file
    pub fn key(&self) -> &'static str {
        match self {
            FieldName::BirthYear => "byr",
            FieldName::IssueYear => "iyr",
            FieldName::ExpirationYear => "eyr",
            FieldName::Height => "hgt",
            FieldName::HairColour => "hcl",
            FieldName::EyeColour => "ecl",
            FieldName::PassportId => "pid",
            FieldName::CountryId => "cid",
        }
    }

}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One parsed passport: key to value, keys unique.
///
/// Keys are kept as raw strings so unknown keys survive parsing; only
/// validation cares which of them are known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, replacing any earlier value for the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Returns the value of a known field
    pub fn field(&self, field: FieldName) -> Option<&str> {
        self.get(field.key())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}
