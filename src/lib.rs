//! passport-scan - count valid passport records in a batch file

pub mod cli;
pub mod observability;
pub mod passport;
