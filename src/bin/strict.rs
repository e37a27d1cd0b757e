//! passport-strict: counts passports whose required fields are present
//! and well-formed.

use passport_scan::cli;
use passport_scan::passport::Policy;

fn main() {
    if let Err(e) = cli::run(Policy::Strict) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
