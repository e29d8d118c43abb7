//! Property-based tests
//!
//! Uses proptest to generate random inputs and verify properties

pub mod password_proptest;
pub mod token_proptest;
pub mod validation_proptest;
