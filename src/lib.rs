//! spendlog - Command-line personal expense tracker
//!
//! This library provides the core functionality for spendlog: recording
//! expenses, viewing them filtered by day or month, and tracking monthly
//! spending against a configurable budget limit.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, money, months)
//! - `storage`: JSON file storage layer
//! - `store`: The expense store owning the list and the monthly limit
//! - `reports`: Monthly category breakdown
//! - `display`: Terminal table and detail formatting
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spendlog::config::SpendlogPaths;
//! use spendlog::store::ExpenseStore;
//!
//! let paths = SpendlogPaths::new()?;
//! let mut store = ExpenseStore::open(paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;
pub mod store;

pub use error::SpendlogError;
