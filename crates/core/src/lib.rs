//! Pet Store Core - Shared types library.
//!
//! This crate provides common types used across all pet store admin components:
//! - `admin` - Promotion management library (store adapter, managers, forms)
//! - `cli` - Command-line admin tools
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, categories, and
//!   promotion display statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
