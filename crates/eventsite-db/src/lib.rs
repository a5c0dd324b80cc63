//! Persistence for the events site: diesel schema, models, and the
//! `CalendarStore` seam with PostgreSQL and in-memory implementations.

pub mod db;
pub mod error;
pub mod model;
pub mod viewer;
