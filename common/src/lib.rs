//! Platform-independent core of the document generator client.
//!
//! Everything with state lives here so it can be exercised on the host:
//! the wire models exchanged with the document service, the identity
//! provider, the catalog loader state, the dynamic form engine, the
//! generation workflow and the artifact export helpers. The Yew frontend
//! owns a single [`session::GeneratorSession`] and forwards every UI event
//! and async completion to it.

pub mod catalog;
pub mod error;
pub mod export;
pub mod form;
pub mod identity;
pub mod model;
pub mod requests;
pub mod session;
pub mod workflow;

pub use error::AppError;
