//! Authentication and access-level resolution.
//!
//! ## Module Organization
//!
//! - `access`: Maps a viewer's group memberships to an access level
//! - `authenticate`: User authentication (single user, proxy)
//! - `depot`: Helpers for extracting the viewer from Salvo requests

pub mod access;
pub mod authenticate;
pub mod depot;

pub use access::{access_level_for_groups, resolve_access_level};
pub use depot::get_viewer_from_depot;
