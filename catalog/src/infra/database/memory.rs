//! In-memory [`Database`] implementation.

use std::{mem, sync::Arc};

use common::operations::{By, Delete, Insert, Select, Update};
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use tracerr::Traced;

use crate::{
    domain::{listing, Listing},
    read,
};

use super::{Database, Error};

/// In-memory record store of [`Listing`]s.
///
/// Clones share the same records.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// Stored [`Listing`]s in their insertion order.
    listings: Arc<RwLock<Vec<Listing>>>,
}

impl Memory {
    /// Creates a new empty [`Memory`] store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Database<Select<By<Vec<Listing>, ()>>> for Memory {
    type Ok = Vec<Listing>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Listing>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut listings = self.listings.read().await.clone();
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listings)
    }
}

impl Database<Select<By<Option<Listing>, listing::Id>>> for Memory {
    type Ok = Option<Listing>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Listing>, listing::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.listings.read().await.iter().find(|l| l.id == id).cloned())
    }
}

impl Database<Select<By<Vec<Listing>, read::listing::Featured>>> for Memory {
    type Ok = Vec<Listing>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Listing>, read::listing::Featured>>,
    ) -> Result<Self::Ok, Self::Err> {
        let read::listing::Featured { limit } = by.into_inner();

        let all = self
            .execute(Select(By::<Vec<Listing>, _>::new(())))
            .await
            .map_err(tracerr::wrap!())?;
        Ok(all
            .into_iter()
            .filter(|l| l.details.featured)
            .take(limit)
            .collect())
    }
}

impl Database<Insert<Listing>> for Memory {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Insert(listing): Insert<Listing>,
    ) -> Result<Self::Ok, Self::Err> {
        check(&listing).map_err(tracerr::wrap!())?;

        let mut listings = self.listings.write().await;
        if listings.iter().any(|l| l.id == listing.id) {
            return Err(tracerr::new!(Error::Rejected(format!(
                "`Listing(id: {})` already exists",
                listing.id,
            ))));
        }
        listings.push(listing);
        Ok(())
    }
}

impl Database<Update<Listing>> for Memory {
    type Ok = Option<Listing>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Update(listing): Update<Listing>,
    ) -> Result<Self::Ok, Self::Err> {
        check(&listing).map_err(tracerr::wrap!())?;

        let mut listings = self.listings.write().await;
        Ok(listings
            .iter_mut()
            .find(|l| l.id == listing.id)
            .map(|stored| mem::replace(stored, listing)))
    }
}

impl Database<Delete<By<Option<Listing>, listing::Id>>> for Memory {
    type Ok = Option<Listing>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Option<Listing>, listing::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();

        let mut listings = self.listings.write().await;
        Ok(listings
            .iter()
            .position(|l| l.id == id)
            .map(|pos| listings.remove(pos)))
    }
}

/// Checks the provided [`Listing`] against the constraints of this store.
fn check(listing: &Listing) -> Result<(), Error> {
    let d = &listing.details;

    for (field, value) in [
        ("price", d.price),
        ("size", d.size),
        ("bathrooms", d.bathrooms),
    ] {
        if value < Decimal::ZERO {
            return Err(Error::Rejected(format!(
                "`{field}` must not be negative",
            )));
        }
    }
    if d.bedrooms < 0 {
        return Err(Error::Rejected("`bedrooms` must not be negative".into()));
    }
    if d.latitude.is_some() != d.longitude.is_some() {
        return Err(Error::Rejected(
            "`latitude` and `longitude` must be provided together".into(),
        ));
    }
    Ok(())
}
