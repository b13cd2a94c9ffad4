//! Employee Registry Reporting
//!
//! This crate ingests an employee registry from delimited text, validates its
//! organisational integrity, and reports on reporting line depth and manager
//! salaries relative to their direct subordinates.

#![warn(missing_docs)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod registry;
pub mod reports;
