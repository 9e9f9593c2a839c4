//! In-memory [`IdentityProvider`] implementation.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracerr::Traced;

use crate::domain::user;

use super::{CurrentUser, Error, IdentityProvider, SignOut};

/// In-memory session of a single user.
///
/// Clones share the same session.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// ID of the signed-in user, if any.
    session: Arc<Mutex<Option<user::Id>>>,
}

impl Memory {
    /// Creates a new [`Memory`] session with nobody signed in.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Creates a new [`Memory`] session with the provided user signed in.
    #[must_use]
    pub fn signed_in(user: user::Id) -> Self {
        Self {
            session: Arc::new(Mutex::new(Some(user))),
        }
    }
}

impl IdentityProvider<CurrentUser> for Memory {
    type Ok = Option<user::Id>;
    type Err = Traced<Error>;

    async fn execute(&self, _: CurrentUser) -> Result<Self::Ok, Self::Err> {
        Ok(*self.session.lock().await)
    }
}

impl IdentityProvider<SignOut> for Memory {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(&self, _: SignOut) -> Result<Self::Ok, Self::Err> {
        *self.session.lock().await = None;
        Ok(())
    }
}
