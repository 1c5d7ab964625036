//! Property-based tests

mod idempotence;
