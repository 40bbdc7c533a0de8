use chrono::NaiveDate;
use kartoteka_core::{Contact, ContactBook, ContactDraft, StoreLoadError};
use kartoteka_store::Store;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
}

fn contact(first: &str, last: &str) -> Contact {
    Contact::new(
        ContactDraft {
            first_name: first.to_string(),
            middle_name: "Test".to_string(),
            last_name: last.to_string(),
            birth_date: "15-06-1990".to_string(),
            email: "test@example.com".to_string(),
            phone: "+7 (912) 555-12-34".to_string(),
        },
        today(),
    )
    .expect("valid test contact")
}

#[test]
fn book_round_trips_through_sqlite() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let mut book = ContactBook::new();
    book.add(contact("Anna", "Petrova"));
    book.add(contact("Boris", "Ivanov"));

    let mut repo = store.contacts();
    book.save_to_store(&mut repo).expect("save to store");
    assert_eq!(repo.count().expect("count"), 2);

    let mut reloaded = ContactBook::new();
    let loaded = reloaded
        .load_from_store(&mut repo, today())
        .expect("load from store");
    assert_eq!(loaded, 2);
    assert_eq!(reloaded, book);
}

#[test]
fn save_is_a_full_replace() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let mut book = ContactBook::new();
    book.add(contact("Anna", "Petrova"));
    book.add(contact("Boris", "Ivanov"));
    book.save_to_store(&mut store.contacts()).expect("first save");

    book.remove(0).expect("remove first");
    book.save_to_store(&mut store.contacts()).expect("second save");

    let mut reloaded = ContactBook::new();
    reloaded
        .load_from_store(&mut store.contacts(), today())
        .expect("load");
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.get(0).expect("one contact").first_name(), "Boris");
}

#[test]
fn rows_come_back_in_insertion_order() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let mut book = ContactBook::new();
    for first in ["Vera", "Anna", "Boris"] {
        book.add(contact(first, "Sidorov"));
    }
    book.save_to_store(&mut store.contacts()).expect("save");

    let rows = store.contacts().read_rows().expect("read rows");
    let firsts: Vec<&str> = rows.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(firsts, ["Vera", "Anna", "Boris"]);
}

#[test]
fn a_corrupt_row_aborts_the_load_and_keeps_the_book() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    store
        .connection()
        .execute(
            "INSERT INTO contacts (first_name, middle_name, last_name, birth_date, email, phone)
             VALUES ('Anna', 'Test', 'Petrova', '99-99-1990', 'anna@example.com', '5551234');",
            [],
        )
        .expect("insert corrupt row");

    let mut book = ContactBook::new();
    book.add(contact("Vera", "Sidorova"));

    let err = book
        .load_from_store(&mut store.contacts(), today())
        .unwrap_err();
    assert!(matches!(err, StoreLoadError::Row { row: 1, .. }));
    assert_eq!(book.len(), 1);
}

#[test]
fn store_survives_reopen_on_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = kartoteka_store::paths::db_path_in(dir.path());

    {
        let store = Store::open(&path).expect("open on disk");
        store.migrate().expect("migrate");
        let mut book = ContactBook::new();
        book.add(contact("Anna", "Petrova"));
        book.save_to_store(&mut store.contacts()).expect("save");
    }

    let store = Store::open(&path).expect("reopen");
    store.migrate().expect("migrate is idempotent");
    let mut reloaded = ContactBook::new();
    reloaded
        .load_from_store(&mut store.contacts(), today())
        .expect("load");
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.get(0).expect("contact").last_name(), "Petrova");
}
