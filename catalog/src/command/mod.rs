//! [`Command`] definition.

pub mod create_listing;
pub mod delete_listing;
pub mod sign_out;
pub mod update_listing;

pub use self::{
    create_listing::CreateListing, delete_listing::DeleteListing,
    sign_out::SignOut, update_listing::UpdateListing,
};

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;
