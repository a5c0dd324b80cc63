//! Query functions over a pooled connection, one module per table family.

pub mod access_mapping;
pub mod event;
pub mod feed_view;
pub mod profile;
pub mod user;
