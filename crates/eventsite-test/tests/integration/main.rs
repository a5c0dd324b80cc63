//! Integration tests for the events site.
//!
//! HTTP tests run against an in-memory store. `pg_store` exercises `PgStore`
//! and needs `TEST_DATABASE_URL`.

mod events_index;
mod ical_feed;
mod pg_store;
