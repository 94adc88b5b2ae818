//! Pure validation primitives for enrollment fields

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Email shape: something@something.something, no embedded whitespace.
/// Deliberately shallow; no length or domain-existence checks.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Check whether a string looks like an email address
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// Check whether a string parses as an absolute URL.
/// Never panics; any parse failure is simply `false`.
pub fn is_valid_url(s: &str) -> bool {
    Url::parse(s).is_ok()
}

/// Whole years between `birth` and `today`, decremented by one if the
/// anniversary has not yet occurred this year (month/day comparison).
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    mod email {
        use super::*;

        #[test]
        fn test_plain_address_is_valid() {
            assert!(is_valid_email("jane@example.com"));
        }

        #[test]
        fn test_subdomain_and_plus_tag_are_valid() {
            assert!(is_valid_email("jane+tag@mail.example.co"));
        }

        #[test]
        fn test_missing_at_is_invalid() {
            assert!(!is_valid_email("jane.example.com"));
        }

        #[test]
        fn test_missing_dot_after_at_is_invalid() {
            assert!(!is_valid_email("jane@example"));
        }

        #[test]
        fn test_embedded_whitespace_is_invalid() {
            assert!(!is_valid_email("jane doe@example.com"));
            assert!(!is_valid_email("jane@exa mple.com"));
        }

        #[test]
        fn test_empty_string_is_invalid() {
            assert!(!is_valid_email(""));
        }
    }

    mod urls {
        use super::*;

        #[test]
        fn test_https_url_is_valid() {
            assert!(is_valid_url("https://example.com/portfolio"));
        }

        #[test]
        fn test_bare_hostname_is_invalid() {
            // Relative references do not parse as absolute URLs
            assert!(!is_valid_url("example.com"));
        }

        #[test]
        fn test_garbage_never_panics() {
            assert!(!is_valid_url("not a url at all"));
            assert!(!is_valid_url(""));
            assert!(!is_valid_url("http://"));
        }
    }

    mod age {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_day_before_anniversary() {
            assert_eq!(age_on(date(2008, 6, 15), date(2024, 6, 14)), 15);
        }

        #[test]
        fn test_on_anniversary() {
            assert_eq!(age_on(date(2008, 6, 15), date(2024, 6, 15)), 16);
        }

        #[test]
        fn test_day_after_anniversary() {
            assert_eq!(age_on(date(2008, 6, 15), date(2024, 6, 16)), 16);
        }

        #[test]
        fn test_earlier_month_decrements() {
            assert_eq!(age_on(date(2000, 12, 1), date(2024, 1, 1)), 23);
        }
    }
}
