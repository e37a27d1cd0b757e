//! Passport batch scanning
//!
//! Pipeline:
//! - Loader: read the batch file, split into raw blocks on blank lines
//! - Parser: turn each block into a key/value record
//! - Validator: apply a presence or strict policy to each record
//! - Counter: count the records the policy accepts
//!
//! Records are independent and transient; nothing outlives a scan.

mod counter;
mod errors;
mod loader;
mod parser;
mod types;
mod validator;

pub use counter::{count_valid, scan, ScanReport};
pub use errors::{PassportError, PassportResult};
pub use loader::{normalize_line_endings, split_blocks, PassportLoader};
pub use parser::parse_record;
pub use types::{FieldName, Record};
pub use validator::{
    field_predicate, validate_birth_year, validate_expiration_year, validate_eye_colour,
    validate_hair_colour, validate_height, validate_issue_year, validate_passport_id,
    validate_year, FieldPredicate, Policy, Rejection,
};
