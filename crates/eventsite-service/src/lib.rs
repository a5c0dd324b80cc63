//! Request-independent logic behind the events page and the calendar feeds.

pub mod auth;
pub mod calendar;
pub mod error;
pub mod events;
