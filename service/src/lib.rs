//! Service contains the core logic of the users dashboard.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;
pub mod store;

#[cfg(doc)]
use infra::Remote;

pub use self::{
    command::{load_users::StaleFetchPolicy, Command},
    query::Query,
    store::Store,
};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// [`StaleFetchPolicy`] applied when a fetch completes after the
    /// [`Store`]d list has been changed locally.
    pub stale_fetch: StaleFetchPolicy,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<R> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Remote`] listing endpoint of this [`Service`].
    remote: R,

    /// [`Store`] of this [`Service`].
    store: Store,
}

impl<R> Service<R> {
    /// Creates a new [`Service`] with the provided parameters and an empty
    /// [`Store`].
    #[must_use]
    pub fn new(config: Config, remote: R) -> Self {
        Self {
            config,
            remote,
            store: Store::new(),
        }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Remote`] of this [`Service`].
    #[must_use]
    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Returns [`Store`] of this [`Service`].
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }
}
