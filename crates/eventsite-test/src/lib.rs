//! Events site - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can reach
//! every layer through a single dependency.

#![allow(ambiguous_glob_reexports)]

pub mod component {
    pub use eventsite_core::*;
    pub use eventsite_service::*;

    pub mod db {
        pub use eventsite_db::db::*;

        pub mod store_handler {
            pub use eventsite_app::store_handler::*;
        }
    }

    pub mod model {
        pub use eventsite_db::model::*;
    }

    pub mod middleware {
        pub use eventsite_app::middleware::*;
    }

    pub mod config {
        pub use eventsite_app::config::ConfigHandler;
        pub use eventsite_core::config::*;
    }
}

pub mod app {
    pub use eventsite_app::*;

    pub mod api {
        pub use eventsite_app::app::api::*;
    }
}
