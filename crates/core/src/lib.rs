//! relq Core - Core types shared by the relq query engine.
//!
//! This crate provides the foundational types:
//!
//! - `Error`: Error types for query construction
//! - `Clause`: The clause kinds a query is built from
//! - `Key`: Dynamic primitive values produced by grouping functions
//!
//! # Example
//!
//! ```rust
//! use relq_core::{Clause, Error, Key};
//!
//! let err = Error::duplicate_clause(Clause::Select);
//! assert_eq!(err.to_string(), "Duplicate SELECT");
//!
//! let key: Key = "teacher".into();
//! assert_eq!(key.as_str(), Some("teacher"));
//! ```

#![no_std]

extern crate alloc;

mod clause;
mod error;
mod key;

pub use clause::Clause;
pub use error::{Error, Result};
pub use key::Key;
