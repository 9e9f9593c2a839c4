//! [`Command`] for creating a new [`Listing`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        listing::{self, form::InvalidForm},
        user, Listing,
    },
    infra::{
        database,
        identity::{self, CurrentUser},
        Database, IdentityProvider,
    },
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Listing`] out of a submitted
/// [`listing::Form`] on behalf of the signed-in user.
#[derive(Clone, Debug, From)]
pub struct CreateListing {
    /// Submitted [`listing::Form`] of a new [`Listing`].
    pub form: listing::Form,
}

impl<Db, Idp> Command<CreateListing> for Service<Db, Idp>
where
    Db: Database<Insert<Listing>, Ok = (), Err = Traced<database::Error>>,
    Idp: IdentityProvider<
        CurrentUser,
        Ok = Option<user::Id>,
        Err = Traced<identity::Error>,
    >,
{
    type Ok = Listing;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateListing) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateListing { form } = cmd;

        let user = self
            .identity()
            .execute(CurrentUser)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::Unauthenticated)
            .map_err(tracerr::wrap!())?;

        let details = form
            .normalize(Some(user))
            .map_err(tracerr::from_and_wrap!(=> E))?;
        let listing = Listing::new(details);

        self.database()
            .execute(Insert(listing.clone()))
            .await
            .inspect_err(|e| {
                log::warn!(
                    "failed to insert `Listing(id: {})`: {e}",
                    listing.id,
                );
            })
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        log::info!(
            "`Listing(id: {})` created by `User(id: {user})`",
            listing.id,
        );

        Ok(listing)
    }
}

/// Error of [`CreateListing`] [`Command`] execution.
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

    /// Submitted [`listing::Form`] is invalid.
    #[display("{_0}")]
    InvalidForm(InvalidForm),
}
