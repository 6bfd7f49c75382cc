//! # OPARGS CORE LIBRARY
//!
//! **DECLARATIVE ARGUMENT VALIDATION FOR IMAGE PIPELINE OPERATIONS**
//!
//! **ARCHITECTURE**: Closed set of validator kinds behind one `Validator` enum
//! **GUARANTEE**: Pure, synchronous checks; validators are read-only after `build()`
//! **SUBSUMPTION**: `accept` decides whether one configuration admits everything another does
//!
//! Operations declare one validator per parameter ([`schema::OperationSchema`]).
//! A check fills in defaults, rejects violations with an [`errors::ArgumentError`]
//! whose message can be shown to the user directly, and resolves the method
//! (algorithm variant) before any other parameter.

pub mod api;
pub mod errors;
pub mod schema;
pub mod types;

// **VALIDATION MODULE REGISTRATION**
pub mod validation;
