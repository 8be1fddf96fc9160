use std::sync::Arc;

use parking_lot::Mutex;

use hashroute_core::{
    EventKind, Host, MemoryHost, NavigationError, RouteBackend, RouteManifest, RouteRecord, Router,
    RouterEvent, RouterOptions,
};

struct Fixture {
    router: Router,
    host: MemoryHost,
    events: Arc<Mutex<Vec<RouterEvent>>>,
}

fn fixture(options: RouterOptions) -> Fixture {
    let host = MemoryHost::default();
    let router = Router::new(options, Arc::new(host.clone()));

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    assert!(router
        .events()
        .on("recorder", move |event| sink.lock().push(event.clone())));

    Fixture {
        router,
        host,
        events,
    }
}

fn redirect(id: &str, to: &str) -> RouteRecord {
    RouteRecord::new(id).unwrap().with_redirect(to)
}

#[test]
fn test_navigate_registered_route() {
    let f = fixture(RouterOptions::new());
    for id in ["about", "docs", "contact"] {
        assert!(f.router.register(id));
    }

    for id in ["about", "docs", "contact"] {
        assert!(f.router.navigate(id));
        assert_eq!(f.router.state().current.as_deref(), Some(id));
        assert_eq!(f.host.location_hash(), format!("/{}", id));
    }

    let state = f.router.state();
    assert_eq!(state.previous.as_deref(), Some("docs"));
}

#[test]
fn test_navigate_unregistered_with_404_route() {
    let f = fixture(RouterOptions::new());
    f.router
        .register(RouteRecord::new("404").unwrap().with_title("Page not found"));

    f.router.navigate("missing");
    assert_eq!(f.router.state().current.as_deref(), Some("404"));
    assert_eq!(f.host.location_hash(), "/404");
    assert_eq!(f.host.title(), "Page not found");
    assert_eq!(
        *f.events.lock(),
        vec![RouterEvent::new(EventKind::RouterUpdate, "404")]
    );
}

#[test]
fn test_navigate_unregistered_without_404_route() {
    let f = fixture(RouterOptions::new());

    f.router.navigate("missing");
    assert_eq!(f.router.state().current.as_deref(), Some("404"));
    assert_eq!(f.host.title(), "Error 404");
    assert_eq!(
        *f.events.lock(),
        vec![RouterEvent::new(EventKind::NotFound, "404")]
    );
}

#[test]
fn test_redirect_resolves_to_target() {
    let f = fixture(RouterOptions::new());
    f.router.register(redirect("a", "b"));
    f.router.register(RouteRecord::new("b").unwrap().with_title("B"));

    f.router.navigate("a");
    assert_eq!(f.router.state().current.as_deref(), Some("b"));
    assert_eq!(f.host.location_hash(), "/b");
    assert_eq!(f.host.title(), "B");
}

#[test]
fn test_redirect_to_unregistered_keeps_original() {
    let f = fixture(RouterOptions::new());
    f.router.register(redirect("a", "gone"));

    f.router.navigate("a");
    assert_eq!(f.router.state().current.as_deref(), Some("a"));
    assert_eq!(f.events.lock()[0].target, "a");
}

#[test]
fn test_navigate_home_ignores_path_table() {
    let f = fixture(RouterOptions::new());
    f.router.register(redirect("home", "elsewhere"));
    f.router.register("elsewhere");

    f.router.navigate("home");
    assert_eq!(f.router.state().current.as_deref(), Some("home"));
    assert_eq!(f.host.location_hash(), "/home");
    assert_eq!(
        *f.events.lock(),
        vec![RouterEvent::new(EventKind::RouterUpdate, "home")]
    );
}

#[test]
fn test_navigate_home_default_home_path() {
    let f = fixture(RouterOptions::new());

    f.router.navigate("home");
    assert_eq!(f.router.state().current.as_deref(), Some("home"));
    assert_eq!(f.host.href(), "http://localhost/#/");
    assert_eq!(f.host.title(), "Home");
}

#[test]
fn test_repeated_navigation_emits_once() {
    let f = fixture(RouterOptions::new());
    f.router.register("docs");

    f.router.navigate("docs");
    f.router.navigate("docs");
    assert_eq!(f.events.lock().len(), 1);

    // the host firing hashchange for the fragment we just pushed
    f.router.hash_change();
    assert_eq!(f.events.lock().len(), 1);
}

#[test]
fn test_unregister_is_idempotent() {
    let f = fixture(RouterOptions::new());
    f.router.register("docs");

    assert!(f.router.unregister("docs"));
    assert!(f.router.unregister("docs"));

    f.router.navigate("docs");
    assert_eq!(f.router.state().current.as_deref(), Some("404"));
}

#[test]
fn test_hash_change_resolves_location() {
    let f = fixture(RouterOptions::new());
    f.router.register(RouteRecord::new("docs").unwrap().with_title("Docs"));

    f.host.set_hash("#!/docs");
    assert!(f.router.hash_change());
    assert_eq!(f.router.state().current.as_deref(), Some("docs"));
    assert_eq!(f.host.title(), "Docs");
    assert_eq!(f.events.lock()[0].target, "docs");
}

#[test]
fn test_load_with_empty_hash_goes_home() {
    let f = fixture(RouterOptions::new().with_home("/welcome"));

    assert!(f.router.load());
    assert_eq!(f.router.state().current.as_deref(), Some("home"));
    assert_eq!(f.host.location_hash(), "/welcome");
}

#[test]
fn test_prefix_and_subpath() {
    let host = MemoryHost::new("https://example.com/site/index.html").unwrap();
    let router = Router::new(
        RouterOptions::new().with_prefix("app").with_subpath(true),
        Arc::new(host.clone()),
    );
    router.register("docs");

    router.navigate("docs");
    assert_eq!(host.href(), "https://example.com/site/#/app/docs");

    host.set_hash("/app/docs");
    router.hash_change();
    assert_eq!(router.state().current.as_deref(), Some("docs"));
}

#[test]
fn test_escaped_ids_survive_reload() {
    let f = fixture(RouterOptions::new());
    f.router.register(RouteRecord::new("my page").unwrap().with_title("Mine"));

    assert!(f.router.navigate("my page"));
    assert_eq!(f.host.location_hash(), "/my%20page");

    assert!(f.router.load());
    assert_eq!(f.router.state().current.as_deref(), Some("my page"));
    assert_eq!(f.host.title(), "Mine");
}

#[test]
fn test_route_named_after_prefix() {
    let f = fixture(RouterOptions::new().with_prefix("app"));
    f.router.register("app");

    f.router.navigate("app");
    assert_eq!(f.host.href(), "http://localhost/#/app/app");

    f.router.load();
    assert_eq!(f.router.state().current.as_deref(), Some("app"));
}

#[test]
fn test_navigate_then_reload_round_trip() {
    let ids = ["docs", "my page", "café", "100%", "app", "app/settings", "a#b", "<b>"];

    for options in [
        RouterOptions::new(),
        RouterOptions::new().with_prefix("app"),
        RouterOptions::new().with_prefix("/app/").with_subpath(true),
    ] {
        let host = MemoryHost::new("https://example.com/site/index.html").unwrap();
        let router = Router::new(options.clone(), Arc::new(host.clone()));
        for id in ids {
            assert!(router.register(id));
        }

        for id in ids {
            assert!(router.navigate(id));
            assert_eq!(router.state().current.as_deref(), Some(id));

            assert!(router.load());
            assert_eq!(
                router.state().current.as_deref(),
                Some(id),
                "{:?} reloaded from {}",
                options,
                host.href()
            );
        }
    }
}

#[test]
fn test_subscriber_can_navigate_from_handler() {
    let f = fixture(RouterOptions::new());
    f.router.register(redirect("legacy", "gone"));
    f.router.register("docs");

    let router = f.router.clone();
    f.router.events().on("forwarder", move |event| {
        if event.target == "legacy" {
            router.navigate("docs");
        }
    });

    f.router.navigate("legacy");
    assert_eq!(f.router.state().current.as_deref(), Some("docs"));
    assert_eq!(f.router.state().previous.as_deref(), Some("legacy"));
}

#[test]
fn test_unsubscribed_handler_receives_nothing() {
    let f = fixture(RouterOptions::new());
    f.router.register("docs");

    assert!(f.router.events().unsubscribe("recorder"));
    assert!(!f.router.events().unsubscribe("recorder"));

    f.router.navigate("docs");
    assert!(f.events.lock().is_empty());
}

#[test]
fn test_router_from_manifest() {
    let manifest = RouteManifest::from_json(
        r#"{
            "settings": {"title": "Site", "prefix": "app"},
            "routes": ["home", {"id": "old", "redirect": "new"}, {"id": "new", "title": "New"}]
        }"#,
    )
    .unwrap();

    let host = MemoryHost::default();
    let router = Router::from_manifest(manifest, Arc::new(host.clone()));
    assert_eq!(router.settings().home, "home");
    assert_eq!(router.paths().len(), 3);

    router.navigate("old");
    assert_eq!(router.state().current.as_deref(), Some("new"));
    assert_eq!(host.location_hash(), "/app/new");
    assert_eq!(host.title(), "New");
}

struct CatalogBackend;

impl RouteBackend for CatalogBackend {
    async fn fetch(&self, id: &str) -> Result<Option<RouteRecord>, NavigationError> {
        match id {
            "catalog" => Ok(Some(RouteRecord::new("catalog")?.with_title("Catalog"))),
            "broken" => Err(NavigationError::Backend("upstream unavailable".to_string())),
            _ => Ok(None),
        }
    }
}

#[tokio::test]
async fn test_navigate_with_backend() {
    let f = fixture(RouterOptions::new());

    assert!(f.router.navigate_with("catalog", &CatalogBackend).await);
    assert_eq!(f.router.state().current.as_deref(), Some("catalog"));
    assert_eq!(f.host.title(), "Catalog");
    assert!(f.router.paths().contains("catalog"));

    f.router.navigate_with("broken", &CatalogBackend).await;
    assert_eq!(f.router.state().current.as_deref(), Some("404"));

    assert!(!f.router.navigate_with(" ", &CatalogBackend).await);
}
