use kartoteka_store::Store;

#[test]
fn migrate_sets_the_schema_version() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");
    assert_eq!(store.schema_version().expect("schema version"), 1);
}

#[test]
fn migrate_twice_is_a_noop() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("first migrate");
    store.migrate().expect("second migrate");
    assert_eq!(store.schema_version().expect("schema version"), 1);
}

#[test]
fn contacts_table_exists_after_migration() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let count: i64 = store
        .connection()
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'contacts';",
            [],
            |row| row.get(0),
        )
        .expect("query sqlite_master");
    assert_eq!(count, 1);
}
