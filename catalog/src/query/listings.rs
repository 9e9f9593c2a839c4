//! [`Query`] collection related to the multiple [`Listing`]s.

use common::operations::{By, Select};
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::Config;
use crate::{
    domain::Listing,
    infra::{database, Database},
    read::{self, listing::list},
    Service,
};

use super::{DatabaseQuery, Query};

/// Queries all the [`Listing`]s, the most recently created first.
pub type All = DatabaseQuery<By<Vec<Listing>, ()>>;

/// Queries the featured [`Listing`]s shown on the home page, bounded by the
/// [`Config`]ured limit.
#[derive(Clone, Copy, Debug)]
pub struct Featured;

impl<Db, Idp> Query<Featured> for Service<Db, Idp>
where
    Db: Database<
        Select<By<Vec<Listing>, read::listing::Featured>>,
        Ok = Vec<Listing>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = Vec<Listing>;
    type Err = Traced<database::Error>;

    async fn execute(&self, _: Featured) -> Result<Self::Ok, Self::Err> {
        let limit = self.config().featured.limit;
        self.database()
            .execute(Select(By::<Vec<Listing>, _>::new(
                read::listing::Featured { limit },
            )))
            .await
            .map_err(tracerr::wrap!())
    }
}

/// Queries the [`list::View`] of all the [`Listing`]s derived with the
/// provided [`list::Selector`].
#[derive(Clone, Debug, Default)]
pub struct View(pub list::Selector);

impl<Db, Idp> Query<View> for Service<Db, Idp>
where
    Db: Database<
        Select<By<Vec<Listing>, ()>>,
        Ok = Vec<Listing>,
        Err = Traced<database::Error>,
    >,
{
    type Ok = list::View;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        View(selector): View,
    ) -> Result<Self::Ok, Self::Err> {
        let all = self
            .database()
            .execute(Select(By::<Vec<Listing>, _>::new(())))
            .await
            .map_err(tracerr::wrap!())?;

        let total = all.len();
        let listings = selector.apply(all);
        log::debug!(
            "derived {} of {total} `Listing`s with {selector:?}",
            listings.len(),
        );

        Ok(list::View { listings, total })
    }
}
