//! The events calendar page.

pub mod filters;
pub mod page;

pub use filters::EventFilters;
pub use page::{PageContext, build_page_context};
