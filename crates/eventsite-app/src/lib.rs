//! Events site HTTP server: routing, middleware and page rendering.

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod render;
pub mod store_handler;
pub mod util;
