//! API integration tests

pub mod routes_test;
pub mod users_test;
