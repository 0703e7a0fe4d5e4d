use contact_keeper_core::{
    Category, CommitOutcome, ContactStore, ContactValidationError, DraftTarget,
};

fn add(store: &mut ContactStore, name: &str, phone: &str, categories: &[Category]) {
    store.begin_add();
    store.set_name(name);
    store.set_phone(phone);
    for category in categories {
        store.toggle_category(*category);
    }
    let outcome = store.commit();
    assert!(outcome.is_success(), "unexpected outcome: {outcome:?}");
}

fn names(store: &ContactStore) -> Vec<&str> {
    store
        .contacts()
        .iter()
        .map(|contact| contact.name.as_str())
        .collect()
}

#[test]
fn first_commit_yields_single_contact() {
    let mut store = ContactStore::new();
    store.begin_add();
    store.set_name("Ana");
    store.set_phone("111");
    store.toggle_category(Category::Friends);

    let outcome = store.commit();
    assert!(matches!(outcome, CommitOutcome::Added { position: 0, .. }));
    assert_eq!(store.len(), 1);
    let contact = &store.contacts()[0];
    assert_eq!(contact.name, "Ana");
    assert_eq!(contact.phone, "111");
    assert_eq!(contact.categories.len(), 1);
    assert!(contact.has_category(Category::Friends));
    assert!(!store.is_form_open());
}

#[test]
fn sequential_adds_preserve_insertion_order() {
    let mut store = ContactStore::new();
    for (name, phone) in [("Ana", "1"), ("Bia", "2"), ("Caio", "3"), ("Duda", "4")] {
        add(&mut store, name, phone, &[]);
    }
    assert_eq!(names(&store), vec!["Ana", "Bia", "Caio", "Duda"]);
}

#[test]
fn edit_commit_replaces_in_place() {
    let mut store = ContactStore::new();
    add(&mut store, "Ana", "111", &[]);
    add(&mut store, "Bia", "222", &[Category::Work]);
    add(&mut store, "Caio", "333", &[]);
    let before = store.contacts().to_vec();

    assert!(store.begin_edit(1));
    store.set_name("Beatriz");
    store.toggle_category(Category::Work);
    store.toggle_category(Category::School);
    let outcome = store.commit();

    assert_eq!(
        outcome,
        CommitOutcome::Replaced {
            position: 1,
            contact_id: before[1].id,
        }
    );
    assert_eq!(store.len(), 3);
    assert_eq!(store.contacts()[0], before[0]);
    assert_eq!(store.contacts()[2], before[2]);
    let edited = &store.contacts()[1];
    assert_eq!(edited.id, before[1].id);
    assert_eq!(edited.name, "Beatriz");
    assert_eq!(edited.phone, "222");
    assert!(edited.has_category(Category::School));
    assert!(!edited.has_category(Category::Work));
}

#[test]
fn edit_example_changes_phone_only() {
    let mut store = ContactStore::new();
    add(&mut store, "Ana", "111", &[]);

    assert!(store.begin_edit(0));
    let draft = store.draft().unwrap();
    assert_eq!(draft.name, "Ana");
    assert_eq!(draft.phone, "111");
    assert!(draft.is_edit());

    store.set_phone("222");
    assert_eq!(store.contacts()[0].phone, "111");
    assert!(store.commit().is_success());
    assert_eq!(store.contacts()[0].name, "Ana");
    assert_eq!(store.contacts()[0].phone, "222");
}

#[test]
fn empty_name_commit_is_noop_and_keeps_form_open() {
    let mut store = ContactStore::new();
    add(&mut store, "Ana", "111", &[]);
    let before = store.contacts().to_vec();

    store.begin_add();
    store.set_name("");
    store.set_phone("999");
    assert_eq!(
        store.commit(),
        CommitOutcome::Rejected(ContactValidationError::EmptyName)
    );
    assert_eq!(store.contacts(), before.as_slice());
    assert!(store.is_form_open());
    assert_eq!(store.draft().unwrap().phone, "999");

    assert!(store.begin_edit(0));
    store.set_name("");
    assert!(!store.commit().is_success());
    assert_eq!(store.contacts(), before.as_slice());
    assert!(store.is_form_open());
}

#[test]
fn whitespace_name_is_not_empty_and_is_stored_verbatim() {
    let mut store = ContactStore::new();
    store.begin_add();
    store.set_name("   ");
    store.set_phone("111");
    assert!(store.commit().is_success());

    store.begin_add();
    store.set_name("  Ana  ");
    store.set_phone("222");
    assert!(store.commit().is_success());

    assert_eq!(names(&store), vec!["   ", "  Ana  "]);
}

#[test]
fn toggle_category_twice_restores_set() {
    let mut store = ContactStore::new();
    store.begin_add();
    store.toggle_category(Category::Family);
    let original = store.draft().unwrap().categories.clone();

    store.toggle_category(Category::Work);
    store.toggle_category(Category::Work);
    assert_eq!(store.draft().unwrap().categories, original);

    store.toggle_category(Category::Family);
    store.toggle_category(Category::Family);
    assert_eq!(store.draft().unwrap().categories, original);
}

#[test]
fn confirmed_delete_removes_exactly_one_and_shifts() {
    let mut store = ContactStore::new();
    for name in ["A", "B", "C", "D"] {
        add(&mut store, name, "1", &[]);
    }
    let d_id = store.contacts()[3].id;

    let confirmation = store.request_delete(1).unwrap();
    assert_eq!(confirmation.name, "B");
    assert_eq!(confirmation.prompt(), "Remove \"B\"?");
    assert_eq!(store.len(), 4);

    let (position, removed) = store.confirm_delete().unwrap();
    assert_eq!(position, 1);
    assert_eq!(removed.name, "B");
    assert_eq!(names(&store), vec!["A", "C", "D"]);
    assert_eq!(store.contacts()[2].id, d_id);
    assert!(store.pending_delete().is_none());
}

#[test]
fn cancelled_delete_leaves_list_unchanged() {
    let mut store = ContactStore::new();
    add(&mut store, "A", "1", &[]);
    add(&mut store, "B", "2", &[]);
    let before = store.contacts().to_vec();

    store.request_delete(0).unwrap();
    assert!(store.cancel_delete());
    assert_eq!(store.confirm_delete(), None);
    assert_eq!(store.contacts(), before.as_slice());
}

#[test]
fn out_of_range_positions_are_noops() {
    let mut store = ContactStore::new();
    add(&mut store, "A", "1", &[]);

    assert!(!store.begin_edit(1));
    assert!(!store.is_form_open());
    assert!(store.request_delete(5).is_none());
    assert!(store.pending_delete().is_none());

    store.begin_add();
    assert!(!store.begin_edit(7));
    assert_eq!(store.draft().unwrap().target, DraftTarget::New);
    assert_eq!(store.len(), 1);
}

#[test]
fn cancel_discards_draft_without_touching_list() {
    let mut store = ContactStore::new();
    add(&mut store, "Ana", "111", &[]);
    let before = store.contacts().to_vec();

    assert!(store.begin_edit(0));
    store.set_name("Changed");
    assert!(store.cancel());
    assert!(store.draft().is_none());
    assert_eq!(store.contacts(), before.as_slice());

    store.begin_add();
    store.set_name("Other");
    assert!(store.cancel());
    assert_eq!(store.len(), 1);
}

#[test]
fn begin_add_resets_previous_draft() {
    let mut store = ContactStore::new();
    store.begin_add();
    store.set_name("half typed");
    store.toggle_category(Category::School);

    let draft = store.begin_add();
    assert!(draft.name.is_empty());
    assert!(draft.phone.is_empty());
    assert!(draft.categories.is_empty());
}

#[test]
fn second_delete_request_replaces_pending_prompt() {
    let mut store = ContactStore::new();
    add(&mut store, "A", "1", &[]);
    add(&mut store, "B", "2", &[]);

    store.request_delete(0);
    store.request_delete(1);
    assert_eq!(store.pending_delete().unwrap().name, "B");

    store.confirm_delete();
    assert_eq!(names(&store), vec!["A"]);
}
