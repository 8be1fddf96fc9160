//! Route backends
//!
//! A backend answers for identifiers the path table does not know yet, for
//! example by asking a server. Implementations may use `async fn`.

use std::future::Future;

use hashroute_paths::RouteRecord;

use crate::Result;

pub trait RouteBackend {
    /// Look up the route for `id`. `Ok(None)` means the backend has no such route.
    fn fetch(&self, id: &str) -> impl Future<Output = Result<Option<RouteRecord>>> + Send;
}
