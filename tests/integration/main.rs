//! Integration tests for sql-gate

mod cli_tests;
mod extraction_tests;
mod override_tests;
