//! passport-presence: counts passports carrying every required field.

use passport_scan::cli;
use passport_scan::passport::Policy;

fn main() {
    if let Err(e) = cli::run(Policy::Presence) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
