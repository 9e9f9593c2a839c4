//! [`Handler`] abstractions.

use std::future::Future;

/// Asynchronous handler of an `Args` operation.
///
/// Commands, queries, record stores and identity providers are all expressed
/// as [`Handler`]s of their own operation types.
pub trait Handler<Args = ()> {
    /// Type of a successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided `args`.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
