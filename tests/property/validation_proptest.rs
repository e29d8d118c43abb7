//! Property-based tests for request field validation

use proptest::prelude::*;

use play4good::shared::validation::{validate_email, validate_password, validate_username};

proptest! {
    #[test]
    fn test_usernames_in_bounds_are_accepted(username in "[A-Za-z0-9_]{3,50}") {
        prop_assert!(validate_username(&username).is_ok());
    }

    #[test]
    fn test_usernames_with_whitespace_are_rejected(
        head in "[a-z]{2,10}",
        tail in "[a-z]{2,10}",
    ) {
        let username = format!("{} {}", head, tail);
        let err = validate_username(&username).unwrap_err();
        prop_assert_eq!(err.field(), "username");
    }

    #[test]
    fn test_plain_emails_are_accepted(
        local in "[a-z0-9.]{1,20}",
        host in "[a-z0-9]{1,20}",
        tld in "[a-z]{2,6}",
    ) {
        let email = format!("{}@{}.{}", local, host, tld);
        prop_assert!(validate_email(&email).is_ok());
    }

    #[test]
    fn test_strings_without_at_sign_are_not_emails(input in "[a-z0-9]{0,30}") {
        prop_assert!(validate_email(&input).is_err());
    }

    #[test]
    fn test_password_length_rule(password in "[a-z]{0,100}") {
        let ok = validate_password(&password).is_ok();
        prop_assert_eq!(ok, (8..=72).contains(&password.len()));
    }
}
