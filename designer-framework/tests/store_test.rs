//! Layout store behaviour: validation, ordering, duplication, movement and
//! persistence through the key-value store.

mod common;

use common::{new_store, open_store, saved_layout, storage_copy};
use layout_designer::{
    Border, Direction, DraftElement, Element, ElementId, MemoryStore, ValidationError,
    LAYOUT_KEY,
};

fn names(elements: &[Element]) -> Vec<&str> {
    elements.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn test_add_valid_names() {
    let mut store = new_store();

    for name in ["topnav", "side_bar", "hero-2", "X", "0", "__", "a-b_c-9"] {
        let element = store.add(&DraftElement::named(name)).unwrap();
        assert_eq!(element.name, name);
    }

    assert_eq!(store.len(), 7);
}

#[test]
fn test_add_invalid_names_leaves_store_unchanged() {
    let mut store = new_store();
    store.add(&DraftElement::named("keep")).unwrap();
    let before = store.snapshot().to_vec();
    let saved_before = saved_layout(&store);

    for name in ["top nav", "a.b", "a:b", "tab\there", "emoji🙂", "semi;colon", "{}"] {
        let result = store.add(&DraftElement::named(name));
        assert!(
            matches!(result, Err(ValidationError::InvalidName(_))),
            "expected '{}' to be rejected",
            name
        );
    }

    assert_eq!(
        store.add(&DraftElement::named("  ")),
        Err(ValidationError::EmptyName)
    );
    assert_eq!(store.snapshot(), before.as_slice());
    assert_eq!(saved_layout(&store), saved_before);
}

#[test]
fn test_add_uses_draft_fields() {
    let mut store = new_store();
    let draft = DraftElement::named("card")
        .size(220.0, 90.0)
        .colour("#00ff00")
        .gradient(true)
        .opacity(Some(0.3))
        .border_radius(Some(14.0))
        .border(Some(Border {
            width: 5.0,
            colour: "#123123".into(),
        }));

    let element = store.add(&draft).unwrap();

    assert_eq!((element.width, element.height), (220.0, 90.0));
    assert_eq!(element.colour.as_str(), "#00ff00");
    assert!(element.use_gradient);
    assert_eq!(element.opacity, Some(0.3));
    assert_eq!(element.border_radius, Some(14.0));
    assert_eq!(element.border.as_ref().map(|b| b.width), Some(5.0));
}

#[test]
fn test_insertion_order_is_kept() {
    let mut store = new_store();
    for name in ["c", "a", "b"] {
        store.add(&DraftElement::named(name)).unwrap();
    }

    assert_eq!(names(store.snapshot()), vec!["c", "a", "b"]);
}

#[test]
fn test_duplicate() {
    let mut store = new_store();
    let original = store
        .add(&DraftElement::named("banner").opacity(Some(0.8)))
        .unwrap();
    let len_before = store.len();

    let copy = store.duplicate(original.id).unwrap();

    assert_eq!(copy.name, "banner-copy");
    assert_eq!(copy.x, original.x + 20.0);
    assert_eq!(copy.y, original.y + 20.0);
    assert_ne!(copy.id, original.id);
    assert_eq!(copy.opacity, original.opacity);
    assert_eq!(store.len(), len_before + 1);
    assert_eq!(store.snapshot().last(), Some(&copy));
}

#[test]
fn test_duplicate_unknown_id_is_noop() {
    let mut store = new_store();
    store.add(&DraftElement::named("a")).unwrap();

    assert!(store.duplicate(ElementId(424242)).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_remove_twice() {
    let mut store = new_store();
    let a = store.add(&DraftElement::named("a")).unwrap();
    let b = store.add(&DraftElement::named("b")).unwrap();

    assert_eq!(store.remove(a.id), Some(a.clone()));
    assert_eq!(store.remove(a.id), None);
    assert_eq!(store.snapshot(), &[b]);
}

#[test]
fn test_move_by_arrow_right() {
    let mut store = new_store();
    let a = store.add(&DraftElement::named("a")).unwrap();

    let moved = store.move_by(a.id, 5.0, 0.0).cloned().unwrap();
    assert_eq!(moved.x, a.x + 5.0);
    assert_eq!(moved.y, a.y);

    let nudged = store.nudge(a.id, Direction::Right).cloned().unwrap();
    assert_eq!(nudged.x, a.x + 10.0);
    assert_eq!(nudged.y, a.y);
}

#[test]
fn test_nudge_each_direction() {
    let mut store = new_store();
    let a = store.add(&DraftElement::named("a")).unwrap();

    store.nudge(a.id, Direction::Up);
    store.nudge(a.id, Direction::Up);
    store.nudge(a.id, Direction::Left);
    store.nudge(a.id, Direction::Down);

    let element = store.get(a.id).unwrap();
    assert_eq!(element.x, a.x - 5.0);
    assert_eq!(element.y, a.y - 5.0);
}

#[test]
fn test_move_to_allows_negative_positions() {
    let mut store = new_store();
    let a = store.add(&DraftElement::named("a")).unwrap();

    let moved = store.move_to(a.id, -40.0, -2.5).cloned().unwrap();
    assert_eq!((moved.x, moved.y), (-40.0, -2.5));
    assert!(store.move_to(ElementId(9999), 1.0, 1.0).is_none());
}

#[test]
fn test_every_mutation_is_saved() {
    let mut store = new_store();
    assert_eq!(saved_layout(&store), None);

    let a = store.add(&DraftElement::named("a")).unwrap();
    let check = |store: &layout_designer::LayoutStore| {
        let json = saved_layout(store).unwrap();
        let saved: Vec<Element> = serde_json::from_str(&json).unwrap();
        assert_eq!(saved.as_slice(), store.snapshot());
    };
    check(&store);

    store.move_by(a.id, 1.0, 1.0);
    check(&store);
    store.resize(a.id, 10.0, 10.0, 0.0, 0.0);
    check(&store);
    store.duplicate(a.id);
    check(&store);
    store
        .update(a.id, &DraftElement::named("renamed"))
        .unwrap();
    check(&store);
    store.remove(a.id);
    check(&store);
}

#[test]
fn test_restore_round_trip() {
    let mut store = new_store();
    store
        .add(&DraftElement::named("header").gradient(true))
        .unwrap();
    let card = store
        .add(&DraftElement::named("card").border_radius(Some(8.0)))
        .unwrap();
    store.add(&DraftElement::named("footer")).unwrap();
    store.duplicate(card.id);

    let reopened = open_store(storage_copy(&store));
    assert_eq!(reopened.snapshot(), store.snapshot());
}

#[test]
fn test_non_finite_moves_keep_layout_restorable() {
    let mut store = new_store();
    store.add(&DraftElement::named("keep")).unwrap();
    let b = store.add(&DraftElement::named("b")).unwrap();

    assert!(store.move_to(b.id, f64::NAN, 0.0).is_none());
    assert!(store.resize(b.id, f64::INFINITY, 10.0, 0.0, 0.0).is_none());
    assert!(store.move_by(b.id, 0.0, f64::NEG_INFINITY).is_none());
    assert!(!saved_layout(&store).unwrap().contains("null"));

    let reopened = open_store(storage_copy(&store));
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.snapshot(), store.snapshot());
}

#[test]
fn test_move_overflowing_to_infinity_is_ignored() {
    let mut store = new_store();
    let a = store.add(&DraftElement::named("a")).unwrap();
    store.move_to(a.id, f64::MAX, 0.0).unwrap();

    assert!(store.move_by(a.id, f64::MAX, 0.0).is_none());
    assert_eq!(store.get(a.id).map(|e| e.x), Some(f64::MAX));
}

#[test]
fn test_non_finite_draft_numbers_rejected() {
    let mut store = new_store();
    let a = store.add(&DraftElement::named("a")).unwrap();

    assert_eq!(
        store.add(&DraftElement::named("b").size(f64::NAN, 10.0)),
        Err(ValidationError::NonFiniteNumber("width"))
    );
    assert_eq!(
        store.update(a.id, &DraftElement::named("a").opacity(Some(f64::INFINITY))),
        Err(ValidationError::NonFiniteNumber("opacity"))
    );
    assert_eq!(store.snapshot(), &[a]);
}

#[test]
fn test_largest_possible_id_restores() {
    let saved = format!(
        r##"[{{"id":{},"name":"last","x":0,"y":0,"width":10,"height":10,"color":"#000"}}]"##,
        u64::MAX
    );
    let mut store = open_store([(LAYOUT_KEY, saved)].into_iter().collect());

    assert_eq!(store.snapshot()[0].id, ElementId(u64::MAX));
    let added = store.add(&DraftElement::named("next")).unwrap();
    assert_eq!(added.id, ElementId(1));
}

#[test]
fn test_restore_missing_or_corrupt_is_empty() {
    assert!(open_store(MemoryStore::new()).is_empty());

    for corrupt in ["", "not json", "{}", "[{\"id\":1}]", "null", "[1,2,3]"] {
        let storage: MemoryStore = [(LAYOUT_KEY, corrupt)].into_iter().collect();
        let store = open_store(storage);
        assert!(store.is_empty(), "expected '{}' to restore as empty", corrupt);
    }
}

#[test]
fn test_restore_rereads_storage() {
    let mut store = new_store();
    store.add(&DraftElement::named("a")).unwrap();
    store.restore();
    assert_eq!(names(store.snapshot()), vec!["a"]);
}

#[test]
fn test_clear_erases_saved_entry() {
    let mut store = new_store();
    store.add(&DraftElement::named("a")).unwrap();
    store.add(&DraftElement::named("b")).unwrap();
    assert!(store.storage().get(LAYOUT_KEY).is_some());

    store.clear();

    assert!(store.is_empty());
    assert!(store.storage().get(LAYOUT_KEY).is_none());
    assert!(open_store(storage_copy(&store)).is_empty());
}

#[test]
fn test_ids_unique_after_clear() {
    let mut store = new_store();
    let a = store.add(&DraftElement::named("a")).unwrap();
    store.clear();
    let b = store.add(&DraftElement::named("b")).unwrap();

    assert_ne!(a.id, b.id);
}

#[test]
fn test_new_elements_placed_left_of_sidebar() {
    let mut store = new_store();

    for i in 0..50 {
        let element = store
            .add(&DraftElement::named(format!("e{}", i)))
            .unwrap();
        // default viewport is 1280x800
        assert!(element.x >= 0.0 && element.x + element.width <= 1280.0 - 300.0);
        assert!(element.y >= 0.0 && element.y + element.height <= 800.0);
    }
}
