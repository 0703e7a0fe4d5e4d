//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `contact_keeper_core` linkage without the Flutter runtime.
//! - Walk one add/edit/delete cycle and print the resulting rows.

use contact_keeper_core::{Category, ContactStore};

fn main() {
    println!("contact_keeper_core ping={}", contact_keeper_core::ping());
    println!(
        "contact_keeper_core version={}",
        contact_keeper_core::core_version()
    );

    let mut store = ContactStore::new();
    for (name, phone, category) in [
        ("Ana", "111", Some(Category::Family)),
        ("Bia", "222", None),
    ] {
        store.begin_add();
        store.set_name(name);
        store.set_phone(phone);
        if let Some(category) = category {
            store.toggle_category(category);
        }
        println!("commit {name}: {:?}", store.commit());
    }

    if store.begin_edit(1) {
        store.toggle_category(Category::Work);
        println!("edit Bia: {:?}", store.commit());
    }

    if let Some(confirmation) = store.request_delete(0) {
        println!("{}", confirmation.prompt());
    }
    println!("deleted: {}", store.confirm_delete().is_some());

    for row in store.rows() {
        println!(
            "{} | {} | {} | {}",
            row.position, row.name, row.phone, row.categories_label
        );
    }
}
