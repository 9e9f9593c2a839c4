//! [`Command`] for deleting a [`Listing`].

use common::operations::{By, Delete};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{listing, user, Listing},
    infra::{
        database,
        identity::{self, CurrentUser},
        Database, IdentityProvider,
    },
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`Listing`].
#[derive(Clone, Copy, Debug, From)]
pub struct DeleteListing {
    /// ID of the [`Listing`] to delete.
    pub id: listing::Id,
}

impl<Db, Idp> Command<DeleteListing> for Service<Db, Idp>
where
    Db: Database<
        Delete<By<Option<Listing>, listing::Id>>,
        Ok = Option<Listing>,
        Err = Traced<database::Error>,
    >,
    Idp: IdentityProvider<
        CurrentUser,
        Ok = Option<user::Id>,
        Err = Traced<identity::Error>,
    >,
{
    type Ok = Listing;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: DeleteListing) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteListing { id } = cmd;

        let user = self
            .identity()
            .execute(CurrentUser)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::Unauthenticated)
            .map_err(tracerr::wrap!())?;

        let listing = self
            .database()
            .execute(Delete(By::<Option<Listing>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ListingNotExists(id))
            .map_err(tracerr::wrap!())?;

        log::info!("`Listing(id: {id})` deleted by `User(id: {user})`");

        Ok(listing)
    }
}

/// Error of [`DeleteListing`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`IdentityProvider`] error.
    #[display("`IdentityProvider` operation failed: {_0}")]
    Identity(identity::Error),

    /// Nobody is signed in.
    #[display("No user is signed in")]
    #[from(ignore)]
    Unauthenticated,

    /// [`Listing`] doesn't exist.
    #[display("`Listing(id: {_0})` does not exist")]
    #[from(ignore)]
    ListingNotExists(#[error(not(source))] listing::Id),
}
