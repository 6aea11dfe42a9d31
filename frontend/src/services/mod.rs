//! Browser bindings of the core: HTTP calls, identity storage and export.

pub mod api;
pub mod export;
pub mod identity;
