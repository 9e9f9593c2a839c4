//! Identity provider of the signed-in administrator.
//!
//! An identity provider is an [`IdentityProvider`] handling [`CurrentUser`]
//! and [`SignOut`] operations. Its protocol is up to the implementation.

#[cfg(feature = "memory")]
pub mod memory;

use derive_more::{Display, Error as StdError};

#[cfg(feature = "memory")]
pub use self::memory::Memory;

/// Identity provider operation.
pub use common::Handler as IdentityProvider;

/// Operation of looking up the ID of the signed-in user, if any.
#[derive(Clone, Copy, Debug)]
pub struct CurrentUser;

/// Operation of signing the current user out.
#[derive(Clone, Copy, Debug)]
pub struct SignOut;

/// [`IdentityProvider`] error.
#[derive(Clone, Debug, Display, Eq, PartialEq, StdError)]
pub enum Error {
    /// Identity provider cannot be reached.
    #[display("Identity provider is unavailable: {_0}")]
    Unavailable(#[error(not(source))] String),
}
