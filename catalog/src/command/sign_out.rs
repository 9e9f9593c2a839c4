//! [`Command`] for signing the current user out.

use tracerr::Traced;
use tracing as log;

use crate::{
    infra::{identity, IdentityProvider},
    Service,
};

use super::Command;

/// [`Command`] for signing the current user out.
///
/// Succeeds even if nobody is signed in.
#[derive(Clone, Copy, Debug)]
pub struct SignOut;

impl<Db, Idp> Command<SignOut> for Service<Db, Idp>
where
    Idp: IdentityProvider<
        identity::SignOut,
        Ok = (),
        Err = Traced<identity::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(&self, _: SignOut) -> Result<Self::Ok, Self::Err> {
        self.identity()
            .execute(identity::SignOut)
            .await
            .map_err(tracerr::wrap!())?;

        log::info!("user signed out");

        Ok(())
    }
}

/// Error of [`SignOut`] [`Command`] execution.
pub type ExecutionError = identity::Error;
