//! Record store of [`Listing`]s.
//!
//! A record store is a [`Database`] handling the following operations:
//! - [`Select`]`<`[`By`]`<Vec<Listing>, ()>>`: all the [`Listing`]s, the most
//!   recently created first;
//! - [`Select`]`<`[`By`]`<Option<Listing>, listing::Id>>`: a single
//!   [`Listing`], if it exists;
//! - [`Select`]`<`[`By`]`<Vec<Listing>, listing::Featured>>`: featured
//!   [`Listing`]s, bounded by the limit;
//! - [`Insert`]`<Listing>`: storing a new [`Listing`], checking the store
//!   constraints;
//! - [`Update`]`<Listing>`: replacing a stored [`Listing`], checking the
//!   store constraints, and returning the replaced one if it existed;
//! - [`Delete`]`<`[`By`]`<Option<Listing>, listing::Id>>`: removing a
//!   [`Listing`], returning it if it existed.
//!
//! [`Listing`]: crate::domain::Listing
//! [`By`]: common::operations::By
//! [`Delete`]: common::operations::Delete
//! [`Insert`]: common::operations::Insert
//! [`Select`]: common::operations::Select
//! [`Update`]: common::operations::Update

#[cfg(feature = "memory")]
pub mod memory;

use derive_more::{Display, Error as StdError};

#[cfg(feature = "memory")]
pub use self::memory::Memory;

/// Record store operation.
pub use common::Handler as Database;

/// [`Database`] error.
#[derive(Clone, Debug, Display, Eq, PartialEq, StdError)]
pub enum Error {
    /// Record store cannot be reached or refused the access.
    #[display("Record store is unavailable: {_0}")]
    Unavailable(#[error(not(source))] String),

    /// Record store rejected the provided payload.
    #[display("Record store rejected the payload: {_0}")]
    Rejected(#[error(not(source))] String),
}
