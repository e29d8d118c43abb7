//! Property-based tests for password hashing
//!
//! bcrypt is slow even at the minimum cost, so case counts stay small.

use proptest::prelude::*;

use play4good::backend::auth::password::{PasswordError, PasswordHasher, MIN_COST};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_hash_verifies_only_its_password(
        password in "[ -~]{8,64}",
        suffix in "[a-z]{1,4}",
    ) {
        let hasher = PasswordHasher::new(MIN_COST).unwrap();
        let digest = hasher.hash(&password).unwrap();

        prop_assert!(hasher.verify(&password, &digest).unwrap());
        let longer = format!("{}{}", password, suffix);
        prop_assert!(!hasher.verify(&longer, &digest).unwrap());
    }

    #[test]
    fn test_over_long_passwords_are_refused(extra in 1usize..64) {
        let hasher = PasswordHasher::new(MIN_COST).unwrap();
        let password = "x".repeat(72 + extra);
        prop_assert!(
            matches!(hasher.hash(&password), Err(PasswordError::TooLong { .. })),
            "expected TooLong for a {}-byte password",
            password.len()
        );
    }
}
