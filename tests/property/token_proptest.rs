//! Property-based tests for token issuing and verification

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

use play4good::backend::auth::sessions::{TokenError, TokenIssuer};

fn issuer(secret: &str) -> TokenIssuer {
    TokenIssuer::new(secret.as_bytes(), Duration::hours(24))
}

proptest! {
    #[test]
    fn test_issued_token_verifies_until_expiry(
        user_id in 1i32..i32::MAX,
        issued_at in 1_000_000_000i64..2_000_000_000i64,
        elapsed in 0i64..(24 * 3600),
    ) {
        let tokens = issuer("proptest-secret");
        let now = Utc.timestamp_opt(issued_at, 0).unwrap();
        let issued = tokens.issue_at(user_id, now).unwrap();

        let verified = tokens.verify_at(&issued.token, now + Duration::seconds(elapsed));
        prop_assert_eq!(verified.unwrap(), user_id);
        prop_assert!(matches!(
            tokens.verify_at(&issued.token, issued.expires_at),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_other_secret_rejects(
        user_id in 1i32..i32::MAX,
        secret in "[a-z0-9]{8,32}",
    ) {
        prop_assume!(secret != "proptest-secret");
        let issued = issuer("proptest-secret").issue(user_id).unwrap();
        prop_assert!(matches!(
            issuer(&secret).verify(&issued.token),
            Err(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn test_spliced_payload_rejects(
        a in 1i32..i32::MAX,
        b in 1i32..i32::MAX,
    ) {
        prop_assume!(a != b);
        let tokens = issuer("proptest-secret");
        let now = Utc::now();
        let token_a = tokens.issue_at(a, now).unwrap().token;
        let token_b = tokens.issue_at(b, now).unwrap().token;

        // Header and payload of b with the signature of a
        let parts_a: Vec<&str> = token_a.split('.').collect();
        let parts_b: Vec<&str> = token_b.split('.').collect();
        let forged = format!("{}.{}.{}", parts_b[0], parts_b[1], parts_a[2]);

        prop_assert!(matches!(tokens.verify(&forged), Err(TokenError::InvalidSignature)));
    }

    #[test]
    fn test_arbitrary_strings_never_verify(junk in "[A-Za-z0-9_.-]{0,64}") {
        prop_assert!(issuer("proptest-secret").verify(&junk).is_err());
    }
}
