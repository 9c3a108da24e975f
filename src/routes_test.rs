use super::*;

// =============================================================
// Route table shape
// =============================================================

#[test]
fn route_table_has_four_entries() {
    assert_eq!(ROUTES.len(), 4);
}

#[test]
fn route_paths_are_unique() {
    for (i, a) in ROUTES.iter().enumerate() {
        for (j, b) in ROUTES.iter().enumerate() {
            if i != j {
                assert_ne!(a.path, b.path);
                assert_ne!(a.name, b.name);
            }
        }
    }
}

#[test]
fn route_table_covers_storefront_views() {
    let names: Vec<&str> = ROUTES.iter().map(|r| r.name).collect();
    assert_eq!(names, ["lessons", "cart", "login", "register"]);
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn find_resolves_root_to_lessons() {
    let entry = find("/").expect("root route");
    assert_eq!(entry.name, "lessons");
}

#[test]
fn find_resolves_each_listed_path() {
    for route in &ROUTES {
        let entry = find(route.path).expect("listed route");
        assert_eq!(entry.name, route.name);
    }
}

#[test]
fn find_misses_unknown_path() {
    assert!(find("/checkout").is_none());
    assert!(find("").is_none());
    assert!(find("/cart/").is_none());
}
