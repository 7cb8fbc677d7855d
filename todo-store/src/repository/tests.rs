//! Repository Integration Tests
//!
//! Tests for ItemRepository and ListRepository with in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::domain::DomainError;
    use crate::repository::{init_db, DbState, ItemRepository, ListRepository, Repository, MEMORY_URL};

    fn setup_test_db() -> (DbState, ItemRepository, ListRepository) {
        let db_state = init_db(MEMORY_URL).expect("Failed to init test DB");
        let items = ItemRepository::new(db_state.conn.clone());
        let lists = ListRepository::new(db_state.conn.clone());
        (db_state, items, lists)
    }

    async fn count(db: &DbState, table: &str) -> i64 {
        let conn = db.conn.lock().await;
        conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
            .expect("count query")
    }

    async fn exec(db: &DbState, sql: &str) {
        let conn = db.conn.lock().await;
        conn.execute_batch(sql).expect("setup sql");
    }

    #[tokio::test]
    async fn test_get_or_create_item_is_keyed_by_description() {
        let (_db, items, _) = setup_test_db();

        let first = items.get_or_create("Milk, 2").await.expect("create");
        let second = items.get_or_create("Milk, 9").await.expect("lookup");

        assert_eq!(first.id, second.id);
        assert_eq!(second.priority.as_str(), "2");
    }

    #[tokio::test]
    async fn test_item_identity_is_case_sensitive() {
        let (db, items, _) = setup_test_db();

        let upper = items.get_or_create("Milk, 1").await.unwrap();
        let lower = items.get_or_create("milk, 2").await.unwrap();

        assert_ne!(upper.id, lower.id);
        assert_eq!(count(&db, "items").await, 2);
        assert_eq!(items.find_by_description("milk").await.unwrap().unwrap().priority.as_str(), "2");
    }

    #[tokio::test]
    async fn test_get_or_create_item_rejects_malformed_entry() {
        let (db, items, _) = setup_test_db();

        let err = items.get_or_create("no comma here").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(count(&db, "items").await, 0);
    }

    #[tokio::test]
    async fn test_update_priority() {
        let (_db, items, _) = setup_test_db();
        let created = items.get_or_create("Eggs, 1").await.unwrap();

        let updated = items.update("Eggs", "5").await.expect("update");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.priority.as_str(), "5");

        let found = items.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.priority.as_str(), "5");
    }

    #[tokio::test]
    async fn test_update_missing_item_is_not_found() {
        let (db, items, _) = setup_test_db();

        let err = items.update("Ghost", "3").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(count(&db, "items").await, 0);
    }

    #[tokio::test]
    async fn test_create_list_with_items() {
        let (_db, items, lists) = setup_test_db();

        let list = lists.get_or_create("Groceries", &["Milk, 2", "Eggs, 1"]).await.expect("create");
        assert!(list.id > 0);
        assert_eq!(list.title.as_str(), "Groceries");

        let members = lists.items_of(list.id).await.unwrap();
        let names: Vec<_> = members.iter().map(|i| (i.description.as_str(), i.priority.as_str())).collect();
        assert_eq!(names, vec![("Milk", "2"), ("Eggs", "1")]);

        assert_eq!(items.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_repeated_list_submission_duplicates_associations() {
        let (db, _, lists) = setup_test_db();
        let entries = ["Milk, 2", "Eggs, 1"];

        let first = lists.get_or_create("Groceries", &entries).await.unwrap();
        let second = lists.get_or_create("Groceries", &entries).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(count(&db, "lists").await, 1);
        assert_eq!(count(&db, "items").await, 2);
        assert_eq!(lists.item_count(first.id).await.unwrap(), 4);

        let links = lists.associations(first.id).await.unwrap();
        assert_eq!(links.len(), 4);
        assert_eq!(links[0].item_id, links[2].item_id);
        assert!(links.iter().all(|l| l.list_id == first.id));
    }

    #[tokio::test]
    async fn test_items_are_shared_between_lists() {
        let (_db, _, lists) = setup_test_db();

        let a = lists.get_or_create("Home", &["Milk, 2"]).await.unwrap();
        let b = lists.get_or_create("Office", &["Milk, 7"]).await.unwrap();

        let in_a = lists.items_of(a.id).await.unwrap();
        let in_b = lists.items_of(b.id).await.unwrap();
        assert_eq!(in_a[0].id, in_b[0].id);
        assert_eq!(in_b[0].priority.as_str(), "2");
    }

    #[tokio::test]
    async fn test_malformed_entry_writes_nothing() {
        let (db, _, lists) = setup_test_db();

        let err = lists.get_or_create("Groceries", &["Milk, 2", "Eggs"]).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(count(&db, "lists").await, 0);
        assert_eq!(count(&db, "items").await, 0);
        assert_eq!(count(&db, "on_list").await, 0);
    }

    #[tokio::test]
    async fn test_failed_association_rolls_back_whole_list() {
        let (db, _, lists) = setup_test_db();
        exec(
            &db,
            "CREATE TRIGGER reject_second_link BEFORE INSERT ON on_list
             WHEN (SELECT COUNT(*) FROM on_list) >= 1
             BEGIN SELECT RAISE(ABORT, 'second link rejected'); END;",
        )
        .await;

        let err = lists.get_or_create("Groceries", &["Milk, 2", "Eggs, 1"]).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        assert_eq!(count(&db, "lists").await, 0);
        assert_eq!(count(&db, "items").await, 0);
        assert_eq!(count(&db, "on_list").await, 0);
    }

    #[tokio::test]
    async fn test_rowid_beyond_id_range_is_rejected() {
        let (db, items, lists) = setup_test_db();
        exec(&db, "INSERT INTO items (id, description, priority) VALUES (4294967296, 'Big', '1');").await;

        let err = items.get_or_create("Eggs, 1").await.unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));
        assert_eq!(count(&db, "items").await, 1);

        let err = lists.get_or_create("Groceries", &["Eggs, 1"]).await.unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));
        assert_eq!(count(&db, "lists").await, 0);
        assert_eq!(count(&db, "items").await, 1);
    }

    #[tokio::test]
    async fn test_list_without_items() {
        let (_db, _, lists) = setup_test_db();

        let list = lists.get_or_create::<&str>("Someday", &[]).await.unwrap();
        assert!(lists.items_of(list.id).await.unwrap().is_empty());
        assert!(lists.find_by_title("Someday").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_list_keeps_items() {
        let (db, items, lists) = setup_test_db();
        let list = lists.get_or_create("Groceries", &["Milk, 2", "Eggs, 1"]).await.unwrap();

        assert!(lists.delete("Groceries").await.expect("delete"));

        assert!(lists.find_by_id(list.id).await.unwrap().is_none());
        assert_eq!(count(&db, "on_list").await, 0);
        assert!(items.find_by_description("Milk").await.unwrap().is_some());
        assert!(items.find_by_description("Eggs").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_missing_list_is_noop() {
        let (db, _, lists) = setup_test_db();
        lists.get_or_create("Groceries", &["Milk, 2"]).await.unwrap();

        assert!(!lists.delete("Chores").await.expect("delete"));
        assert!(!lists.delete("Chores").await.expect("repeat delete"));

        assert_eq!(count(&db, "lists").await, 1);
        assert_eq!(count(&db, "items").await, 1);
        assert_eq!(count(&db, "on_list").await, 1);
    }

    #[tokio::test]
    async fn test_list_all() {
        let (_db, _, lists) = setup_test_db();
        lists.get_or_create("A", &["x, 1"]).await.unwrap();
        lists.get_or_create("B", &["y, 1"]).await.unwrap();

        let all = lists.list().await.unwrap();
        let titles: Vec<_> = all.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_file_database_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todo.db");
        let url = path.to_str().unwrap();

        {
            let db = init_db(url).unwrap();
            let lists = ListRepository::new(db.conn.clone());
            lists.get_or_create("Groceries", &["Milk, 2"]).await.unwrap();
        }

        let db = init_db(url).unwrap();
        let lists = ListRepository::new(db.conn.clone());
        let list = lists.find_by_title("Groceries").await.unwrap().expect("persisted list");
        assert_eq!(lists.item_count(list.id).await.unwrap(), 1);
    }
}
