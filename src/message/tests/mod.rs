//! Unit tests for the message module.
//!
//! Tests are organised by layer: domain aggregate, field rules, the
//! in-memory store, and the rule engine against both the in-memory store and
//! a mocked repository.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
