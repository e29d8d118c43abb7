//! PostgreSQL store tests (run with `--ignored` and a live `DATABASE_URL`)

pub mod migrations_test;
