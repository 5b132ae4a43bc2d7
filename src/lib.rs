//! Missive: organization-scoped message management.
//!
//! This crate provides the business-rule layer for a message resource owned
//! by an organization: field validation, per-organization title uniqueness,
//! and active-state gating of updates and deletes. Every expected failure is
//! reported as a variant of a closed outcome type rather than as an error.
//!
//! # Architecture
//!
//! Missive follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`message`]: Message aggregate, storage port and rule engine

pub mod message;
