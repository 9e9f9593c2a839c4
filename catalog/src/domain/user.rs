//! User-related definitions.
//!
//! Users are owned by the identity provider, the catalog only refers to them.

use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(doc)]
use crate::domain::Listing;

/// ID of a user known to the identity provider.
///
/// Used as a weak reference (e.g. the creator of a [`Listing`]): the user may
/// no longer exist.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}
