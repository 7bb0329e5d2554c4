//! Integration tests for the router and link call sites

use typed_href::{
    MemoryHistory, NavOptions, Params, ResolveError, RouteError, RouteManifest, TypedLink,
    TypedRouter,
};

#[test]
fn test_router_pushes_resolved_paths() {
    let mut router = TypedRouter::new(MemoryHistory::default());

    router
        .push("/user/[id]", Some(&Params::new().with("id", "42")), NavOptions::new())
        .expect("Should push");
    router
        .push(
            "/blog/[...slug]",
            Some(&Params::new().with("slug", ["2025", "pricing"])),
            NavOptions::new().with_scroll(false),
        )
        .expect("Should push");

    let history = router.navigator();
    assert_eq!(history.entries(), ["/", "/user/42", "/blog/2025/pricing"]);
    assert_eq!(history.last_scroll(), Some(false));
}

#[test]
fn test_router_replace_and_prefetch() {
    let mut router = TypedRouter::new(MemoryHistory::new("/login"));
    router
        .replace("/dashboard", None, NavOptions::new())
        .expect("Should replace");
    router
        .prefetch("/user/[id]", Some(&Params::new().with("id", "a/b")))
        .expect("Should prefetch");

    let history = router.into_inner();
    assert_eq!(history.entries(), ["/dashboard"]);
    assert!(history.is_prefetched("/user/a%2Fb"));
}

#[test]
fn test_router_back_forward_refresh() {
    let mut router = TypedRouter::new(MemoryHistory::default());
    router.push("/a", None, NavOptions::new()).unwrap();
    router.push("/b", None, NavOptions::new()).unwrap();
    router.back();
    assert_eq!(router.navigator().current(), "/a");
    router.forward();
    assert_eq!(router.navigator().current(), "/b");
    router.refresh();
    assert_eq!(router.navigator().refreshes(), 1);
}

#[test]
fn test_router_failure_leaves_history_untouched() {
    let mut router = TypedRouter::new(MemoryHistory::default());
    let err = router
        .push("/blog/[...slug]", Some(&Params::new().with("slug", "flat")), NavOptions::new())
        .unwrap_err();
    assert!(matches!(err, ResolveError::TypeMismatch { .. }));
    assert_eq!(router.navigator().entries(), ["/"]);
}

#[test]
fn test_link_and_router_agree() {
    let params = Params::new().with("lang", "fr").with("path", ["caf\u{e9}", "menu"]);

    let link = TypedLink::new("/[lang]/[...path]")
        .with_params(params.clone())
        .with_attr("class", "nav-link")
        .build()
        .expect("Should build");

    let mut router = TypedRouter::new(MemoryHistory::default());
    router
        .push("/[lang]/[...path]", Some(&params), NavOptions::new())
        .expect("Should push");

    assert_eq!(link.href, "/fr/caf%C3%A9/menu");
    assert_eq!(router.navigator().current(), link.href);
    assert_eq!(link.attr("class"), Some("nav-link"));
}

#[test]
fn test_manifest_guards_router_input() {
    let manifest = RouteManifest::from_str(
        r#"
routes = ["/", "/user/[id]"]

[metadata]
name = "app"
"#,
    )
    .expect("Should parse");

    let params = Params::new().with("id", "9");
    let href = manifest.resolve("/user/[id]", Some(&params)).expect("Should resolve");

    let mut router = TypedRouter::new(MemoryHistory::default());
    router.push(&href, None, NavOptions::new()).expect("Resolved path is static");
    assert_eq!(router.navigator().current(), "/user/9");

    let err = manifest.resolve("/users/[id]", Some(&params)).unwrap_err();
    assert!(matches!(err, RouteError::UnknownRoute { .. }));
}
