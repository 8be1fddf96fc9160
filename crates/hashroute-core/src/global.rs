//! Process-wide router
//!
//! Configured once by the first `init`; later calls return the same router
//! and leave its settings alone. Use `Router::configure` to change them.

use std::sync::{Arc, OnceLock};

use crate::config::RouterOptions;
use crate::host::Host;
use crate::router::Router;

static ROUTER: OnceLock<Router> = OnceLock::new();

pub fn init(options: RouterOptions, host: Arc<dyn Host>) -> Router {
    if let Some(router) = ROUTER.get() {
        tracing::debug!("Process router already initialized");
        return router.clone();
    }
    ROUTER.get_or_init(|| Router::new(options, host)).clone()
}

pub fn get() -> Option<Router> {
    ROUTER.get().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;

    #[test]
    fn test_init_returns_single_instance() {
        let first = init(
            RouterOptions::new().with_title("First"),
            Arc::new(MemoryHost::default()),
        );
        let second = init(
            RouterOptions::new().with_title("Second"),
            Arc::new(MemoryHost::default()),
        );

        assert!(Router::ptr_eq(&first, &second));
        assert!(Router::ptr_eq(&first, &get().unwrap()));
        assert_eq!(second.settings().title, "First");
    }
}
