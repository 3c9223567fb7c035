//! Integration tests running against an in-memory sqlite database

mod api_tests;
mod common;
