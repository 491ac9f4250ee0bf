//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Apply identity, timestamp and default-value policy on creation.
//!
//! # Invariants
//! - Services never bypass repository validation/persistence contracts.
//! - No uniqueness pre-checks live here; the store enforces them.

pub mod account_service;
pub mod assignment_service;
pub mod role_service;
