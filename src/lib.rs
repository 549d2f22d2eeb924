//! Data-access layer for the college website: typed record schemas over a
//! document store, per-page view state, the department fallback resolver,
//! the admin session guard, collection-manager form flows, and the seed.
//!
//! The hosted backends stay external. Persistence enters through the
//! [`store::DocumentStore`] port (a SQLite adapter ships for self-hosted
//! deployments) and authentication through [`auth::IdentityProvider`];
//! rendering and navigation belong to the host UI, which consumes
//! [`view::ViewState`] and [`route::Route`].

pub mod admin;
pub mod auth;
pub mod config;
pub mod content;
pub mod data;
pub mod domain;
pub mod error;
pub mod route;
pub mod seed;
pub mod store;
pub mod view;

#[cfg(feature = "test-utils")]
pub mod test_support;

pub use error::{AppError, Result};
