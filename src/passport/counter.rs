//! Valid-record counting

use std::collections::BTreeMap;

use super::types::{FieldName, Record};
use super::validator::{Policy, Rejection};

/// Outcome of applying a policy to a batch of records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Records examined
    pub total: usize,
    /// Records accepted by the policy
    pub valid: usize,
    /// Rejected records, keyed by the first field that failed
    pub rejections: BTreeMap<FieldName, usize>,
}

impl ScanReport {
    pub fn rejected(&self) -> usize {
        self.total - self.valid
    }
}

/// Counts the records accepted by `policy`.
pub fn count_valid<'a, I>(records: I, policy: Policy) -> usize
where
    I: IntoIterator<Item = &'a Record>,
{
    records.into_iter().filter(|r| policy.accepts(r)).count()
}

/// Applies `policy` to every record and tallies the outcome.
///
/// `on_reject` sees each rejection with the record's position in the batch.
pub fn scan<'a, I, F>(records: I, policy: Policy, mut on_reject: F) -> ScanReport
where
    I: IntoIterator<Item = &'a Record>,
    F: FnMut(usize, &Rejection),
{
    let mut report = ScanReport::default();

    for (index, record) in records.into_iter().enumerate() {
        report.total += 1;
        match policy.check(record) {
            Ok(()) => report.valid += 1,
            Err(rejection) => {
                on_reject(index, &rejection);
                *report.rejections.entry(rejection.field()).or_default() += 1;
            }
        }
    }

    report
}
