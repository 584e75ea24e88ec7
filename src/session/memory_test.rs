use super::*;

#[test]
fn set_then_get_round_trips() {
    let store = MemoryStore::default();
    store.set("k", "v", None);
    assert_eq!(store.get("k").as_deref(), Some("v"));
}

#[test]
fn set_overwrites_existing_values() {
    let store = MemoryStore::default();
    store.set("k", "v1", None);
    store.set("k", "v2", Some(7));
    assert_eq!(store.get("k").as_deref(), Some("v2"));
}

#[test]
fn remove_is_a_noop_for_missing_keys() {
    let store = MemoryStore::default();
    store.remove("missing");
    assert_eq!(store.get("missing"), None);
}

#[test]
fn clear_all_empties_the_store() {
    let store = MemoryStore::default();
    store.set("a", "1", None);
    store.set("b", "2", None);
    store.clear_all();
    assert_eq!(store.get("a"), None);
    assert_eq!(store.get("b"), None);
}
