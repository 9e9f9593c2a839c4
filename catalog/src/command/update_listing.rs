//! [`Command`] for updating an existing [`Listing`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::listing::Details;
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

/// [`Command`] for replacing the [`Details`] of an existing [`Listing`] with
/// the ones of a submitted [`listing::Form`].
///
/// The ID and creation time of the [`Listing`] are preserved, while its
/// creator reference is set to the signed-in user, as on creation.
#[derive(Clone, Debug)]
pub struct UpdateListing {
    /// ID of the [`Listing`] to update.
    pub id: listing::Id,

    /// Submitted [`listing::Form`] with the new [`Details`].
    pub form: listing::Form,
}

impl<Db, Idp> Command<UpdateListing> for Service<Db, Idp>
where
    Db: Database<
            Select<By<Option<Listing>, listing::Id>>,
            Ok = Option<Listing>,
            Err = Traced<database::Error>,
        > + Database<
            Update<Listing>,
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

    async fn execute(&self, cmd: UpdateListing) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateListing { id, form } = cmd;

        let user = self
            .identity()
            .execute(CurrentUser)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::Unauthenticated)
            .map_err(tracerr::wrap!())?;

        let mut listing = self
            .database()
            .execute(Select(By::<Option<Listing>, _>::new(id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ListingNotExists(id))
            .map_err(tracerr::wrap!())?;

        let details = form
            .normalize(Some(user))
            .map_err(tracerr::from_and_wrap!(=> E))?;
        listing.revise(details);

        self.database()
            .execute(Update(listing.clone()))
            .await
            .inspect_err(|e| {
                log::warn!("failed to update `Listing(id: {id})`: {e}");
            })
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            // Deleted concurrently since selected.
            .ok_or(E::ListingNotExists(id))
            .map_err(tracerr::wrap!())
            .map(drop)?;

        log::info!("`Listing(id: {id})` updated by `User(id: {user})`");

        Ok(listing)
    }
}

/// Error of [`UpdateListing`] [`Command`] execution.
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

    /// Submitted [`listing::Form`] is invalid.
    #[display("{_0}")]
    InvalidForm(InvalidForm),
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Insert, Select, Update};
    use tracerr::Traced;

    use crate::{
        command::{update_listing::ExecutionError, UpdateListing},
        domain::{
            listing::{self, PropertyType, Status},
            user, Listing,
        },
        fixture,
        infra::{database, identity, Database},
        Config, Service,
    };

    /// Record store losing its only [`Listing`] right after it is selected.
    #[derive(Clone, Debug)]
    struct Vanishing(Listing);

    impl Database<Select<By<Option<Listing>, listing::Id>>> for Vanishing {
        type Ok = Option<Listing>;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            _: Select<By<Option<Listing>, listing::Id>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(Some(self.0.clone()))
        }
    }

    impl Database<Update<Listing>> for Vanishing {
        type Ok = Option<Listing>;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            _: Update<Listing>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok(None)
        }
    }

    async fn service_with(
        listing: &Listing,
    ) -> Service<database::Memory, identity::Memory> {
        service_signed_in(listing, user::Id::new()).await
    }

    async fn service_signed_in(
        listing: &Listing,
        user: user::Id,
    ) -> Service<database::Memory, identity::Memory> {
        let db = database::Memory::new();
        db.execute(Insert(listing.clone())).await.unwrap();
        Service::new(Config::default(), db, identity::Memory::signed_in(user))
    }

    #[tokio::test]
    async fn replaces_details_stamping_editor() {
        let creator = user::Id::new();
        let editor = user::Id::new();
        let mut original = fixture::listing("Old title", 1, false);
        original.details.created_by = Some(creator);
        let svc = service_signed_in(&original, editor).await;

        let mut form = listing::Form::from(&original);
        form.title = "New title".into();
        form.property_type = "Condo".into();
        form.status = "Sold".into();
        form.featured = true;

        let updated = svc
            .execute(UpdateListing {
                id: original.id,
                form,
            })
            .await
            .unwrap();
        let stored = svc
            .database()
            .execute(Select(By::<Option<Listing>, _>::new(original.id)))
            .await
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert!(updated.updated_at > original.updated_at);
        assert_eq!(updated.details.created_by, Some(editor));
        assert_eq!(updated.details.title.to_string(), "New title");
        assert_eq!(updated.details.property_type, PropertyType::Condo);
        assert_eq!(updated.details.status, Status::Sold);
        assert!(updated.details.featured);
        assert_eq!(stored, Some(updated));
    }

    #[tokio::test]
    async fn fails_on_unknown_listing() {
        let svc = service_with(&fixture::listing("One", 1, false)).await;
        let id = listing::Id::new();

        let err = svc
            .execute(UpdateListing {
                id,
                form: fixture::form("Other"),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.into_inner(),
            ExecutionError::ListingNotExists(missing) if missing == id,
        ));
    }

    #[tokio::test]
    async fn fails_on_listing_deleted_meanwhile() {
        let l = fixture::listing("One", 1, false);
        let svc = Service::new(
            Config::default(),
            Vanishing(l.clone()),
            identity::Memory::signed_in(user::Id::new()),
        );

        let err = svc
            .execute(UpdateListing {
                id: l.id,
                form: fixture::form("Other"),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.into_inner(),
            ExecutionError::ListingNotExists(missing) if missing == l.id,
        ));
    }

    #[tokio::test]
    async fn requires_signed_in_user() {
        let original = fixture::listing("One", 1, false);
        let db = database::Memory::new();
        db.execute(Insert(original.clone())).await.unwrap();
        let svc =
            Service::new(Config::default(), db, identity::Memory::anonymous());

        let err = svc
            .execute(UpdateListing {
                id: original.id,
                form: fixture::form("Other"),
            })
            .await
            .unwrap_err();
        let stored = svc
            .database()
            .execute(Select(By::<Option<Listing>, _>::new(original.id)))
            .await
            .unwrap();

        assert!(matches!(err.into_inner(), ExecutionError::Unauthenticated));
        assert_eq!(stored, Some(original));
    }

    #[tokio::test]
    async fn keeps_record_on_invalid_form() {
        let original = fixture::listing("One", 1, false);
        let svc = service_with(&original).await;
        let mut form = listing::Form::from(&original);
        form.bedrooms = "2.5".into();

        let err = svc
            .execute(UpdateListing {
                id: original.id,
                form,
            })
            .await
            .unwrap_err();
        let stored = svc
            .database()
            .execute(Select(By::<Option<Listing>, _>::new(original.id)))
            .await
            .unwrap();

        assert!(matches!(err.into_inner(), ExecutionError::InvalidForm(_)));
        assert_eq!(stored, Some(original));
    }
}
