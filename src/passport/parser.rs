//! Record parser
//!
//! A field token is a run of non-whitespace containing a colon with at
//! least one character on each side. Anything else is skipped silently.

use std::sync::OnceLock;

use regex::Regex;

use super::types::Record;

static FIELD_TOKEN: OnceLock<Regex> = OnceLock::new();

fn field_token() -> &'static Regex {
    FIELD_TOKEN.get_or_init(|| Regex::new(r"\S+?:\S+").expect("static regex must compile"))
}

/// Parses one raw record block into a [`Record`].
///
/// Tokens are split at their first colon. A repeated key keeps the value
/// of its last occurrence.
pub fn parse_record(block: &str) -> Record {
    let mut record = Record::new();

    for token in field_token().find_iter(block) {
        if let Some((key, value)) = token.as_str().split_once(':') {
            record.insert(key, value);
        }
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_across_lines() {
        let record = parse_record("a:1 b:2\nc:3");
        assert_eq!(record.len(), 3);
        assert_eq!(record.get("a"), Some("1"));
        assert_eq!(record.get("b"), Some("2"));
        assert_eq!(record.get("c"), Some("3"));
    }

    #[test]
    fn test_parse_empty_block() {
        assert!(parse_record("").is_empty());
        assert!(parse_record("\n  \n").is_empty());
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let record = parse_record("byr:1990 byr:2001");
        assert_eq!(record.get("byr"), Some("2001"));
    }

    #[test]
    fn test_malformed_tokens_skipped() {
        let record = parse_record("nocolon a :b c: d:4");
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("d"), Some("4"));
    }

    #[test]
    fn test_value_keeps_later_colons() {
        let record = parse_record("url:http://x");
        assert_eq!(record.get("url"), Some("http://x"));
    }

    #[test]
    fn test_trailing_comma_is_part_of_value() {
        let record = parse_record("byr:1, iyr:2");
        assert_eq!(record.get("byr"), Some("1,"));
        assert_eq!(record.get("iyr"), Some("2"));
    }
}
