//! Core library for cfdash
//!
//! This crate implements the **Functional Core** of the cfdash application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The cfdash project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`cfdash_core`** (this crate): Pure transformation functions with zero I/O
//! - **`cfdash`**: Network access, persistence and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`contest`]: Contest data model, `contest.list` payload validation, detail formatting
//! - [`query`]: Type, favorites and search filtering over a collection
//! - [`pagination`]: Fixed-size 1-indexed pages
//! - [`favorites`]: The favorite id set and its toggle
//! - [`listing`]: List output with navigation commands
//! - [`detail`]: Detail view state machine that discards superseded lookups
//! - [`error`]: Error taxonomy shared with the shell
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use cfdash_core::{pagination, query};
//! use cfdash_core::query::QuerySpec;
//! use cfdash_core::contest::ContestType;
//!
//! let spec = QuerySpec::new().with_type(ContestType::CF).with_search("div");
//! let filtered = query::apply(&collection, &favorites, &spec);
//! let page = pagination::page(&filtered, 10, 1)?;
//!
//! assert!(page.items.len() <= 10);
//! ```

pub mod contest;
pub mod detail;
pub mod error;
pub mod favorites;
pub mod listing;
pub mod pagination;
pub mod query;

pub use error::ContestError;
