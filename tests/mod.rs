//! Test suite for Play4Good
//!
//! This module organizes all tests

pub mod common;
pub mod property;
