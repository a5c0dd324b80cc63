pub mod event;
pub mod feed_view;
pub mod group;
pub mod profile;
pub mod user;
