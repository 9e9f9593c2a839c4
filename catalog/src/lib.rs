//! Catalog of property listings: browsing, searching and administration.
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
pub mod config;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

#[cfg(test)]
mod fixture;

#[cfg(doc)]
use infra::{Database, IdentityProvider};

pub use self::{command::Command, config::Config, query::Query};

/// Catalog service.
#[derive(Clone, Debug)]
pub struct Service<Db, Idp> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Database`] of this [`Service`].
    database: Db,

    /// [`IdentityProvider`] of this [`Service`].
    identity: Idp,
}

impl<Db, Idp> Service<Db, Idp> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub fn new(config: Config, database: Db, identity: Idp) -> Self {
        Self {
            config,
            database,
            identity,
        }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Database`] of this [`Service`].
    #[must_use]
    pub fn database(&self) -> &Db {
        &self.database
    }

    /// Returns [`IdentityProvider`] of this [`Service`].
    #[must_use]
    pub fn identity(&self) -> &Idp {
        &self.identity
    }
}
