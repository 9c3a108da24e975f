#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// One entry in the static route table: a URL path and the view name
/// bound to it. The table is fixed for the process lifetime; `app.rs`
/// binds the same paths to page components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
}

/// Every navigable route in the storefront.
pub const ROUTES: [RouteEntry; 4] = [
    RouteEntry { path: "/", name: "lessons" },
    RouteEntry { path: "/cart", name: "cart" },
    RouteEntry { path: "/login", name: "login" },
    RouteEntry { path: "/register", name: "register" },
];

/// Look up a route by its exact path.
pub fn find(path: &str) -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|r| r.path == path)
}
