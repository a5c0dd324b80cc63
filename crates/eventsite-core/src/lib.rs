//! Shared configuration, constants and access-level types for the events site.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
