//! Integration tests for the storage engine.
//!
//! These tests verify the core storage operations using an in-memory SQLite
//! database, plus a handful of on-disk tests for durability across reopen.

use agenda::db::Database;
use agenda::error::Error;
use chrono::NaiveDate;

/// Helper to create a fresh in-memory database for testing.
fn setup_db() -> Database {
    Database::open_in_memory().expect("Failed to create in-memory database")
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

mod insert_tests {
    use super::*;

    #[test]
    fn insert_returns_strictly_increasing_ids() {
        let db = setup_db();

        let first = db.insert("Buy milk", ymd(2024, 1, 10)).unwrap();
        let second = db.insert("Pay rent", ymd(2024, 1, 5)).unwrap();
        let third = db.insert("Water plants", ymd(2024, 1, 10)).unwrap();

        assert!(second > first);
        assert!(third > second);
    }

    #[test]
    fn insert_allows_duplicate_descriptions_and_deadlines() {
        let db = setup_db();

        db.insert("Buy milk", ymd(2024, 1, 10)).unwrap();
        db.insert("Buy milk", ymd(2024, 1, 10)).unwrap();

        let tasks = db.all_tasks().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].description, "Buy milk");
        assert_eq!(tasks[1].description, "Buy milk");
        assert_ne!(tasks[0].id, tasks[1].id);
    }

    #[test]
    fn deleted_ids_are_never_reused() {
        let db = setup_db();

        db.insert("First", ymd(2024, 1, 1)).unwrap();
        let second = db.insert("Second", ymd(2024, 1, 2)).unwrap();
        db.delete(second).unwrap();

        let third = db.insert("Third", ymd(2024, 1, 3)).unwrap();
        assert!(third > second);
    }
}

mod query_tests {
    use super::*;

    #[test]
    fn tasks_on_filters_by_exact_date_in_insertion_order() {
        let db = setup_db();
        let day = ymd(2024, 1, 10);

        let a = db.insert("Morning errand", day).unwrap();
        db.insert("Elsewhere", ymd(2024, 1, 11)).unwrap();
        let b = db.insert("Evening errand", day).unwrap();

        let tasks = db.tasks_on(day).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, a);
        assert_eq!(tasks[1].id, b);
    }

    #[test]
    fn tasks_on_returns_empty_for_quiet_days() {
        let db = setup_db();
        db.insert("Busy day", ymd(2024, 1, 10)).unwrap();

        let tasks = db.tasks_on(ymd(2024, 1, 11)).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn tasks_before_is_strict_and_sorted_by_deadline() {
        let db = setup_db();
        let cutoff = ymd(2024, 1, 15);

        db.insert("On the day", cutoff).unwrap();
        db.insert("Recent", ymd(2024, 1, 14)).unwrap();
        db.insert("Oldest", ymd(2024, 1, 1)).unwrap();
        db.insert("Future", ymd(2024, 2, 1)).unwrap();

        let tasks = db.tasks_before(cutoff).unwrap();
        let descriptions: Vec<&str> = tasks.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, ["Oldest", "Recent"]);
    }

    #[test]
    fn all_tasks_sorts_by_deadline_then_insertion() {
        let db = setup_db();

        db.insert("Buy milk", ymd(2024, 1, 10)).unwrap();
        db.insert("Pay rent", ymd(2024, 1, 5)).unwrap();
        db.insert("Call home", ymd(2024, 1, 10)).unwrap();

        let tasks = db.all_tasks().unwrap();
        let descriptions: Vec<&str> = tasks.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, ["Pay rent", "Buy milk", "Call home"]);
    }

    #[test]
    fn queries_on_empty_store_return_empty_not_error() {
        let db = setup_db();

        assert!(db.all_tasks().unwrap().is_empty());
        assert!(db.tasks_on(ymd(2024, 1, 1)).unwrap().is_empty());
        assert!(db.tasks_before(ymd(2024, 1, 1)).unwrap().is_empty());
    }

    #[test]
    fn rows_round_trip_description_and_deadline() {
        let db = setup_db();
        let day = ymd(2024, 3, 8);

        let id = db.insert("Water plants", day).unwrap();

        let tasks = db.tasks_on(day).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, id);
        assert_eq!(tasks[0].description, "Water plants");
        assert_eq!(tasks[0].deadline, day);
    }
}

mod delete_tests {
    use super::*;

    #[test]
    fn delete_removes_only_the_given_id() {
        let db = setup_db();

        let keep = db.insert("Keep me", ymd(2024, 1, 5)).unwrap();
        let doomed = db.insert("Drop me", ymd(2024, 1, 6)).unwrap();

        db.delete(doomed).unwrap();

        let tasks = db.all_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, keep);
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let db = setup_db();

        let result = db.delete(42);
        assert!(matches!(result, Err(Error::NotFound(42))));
    }
}

mod durability_tests {
    use super::*;

    #[test]
    fn tasks_survive_reopen() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("tasks.db");

        {
            let db = Database::open(&path).expect("Failed to open database");
            db.insert("Persist me", ymd(2024, 1, 10)).unwrap();
        }

        let db = Database::open(&path).expect("Failed to reopen database");
        let tasks = db.all_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].description, "Persist me");
        assert_eq!(tasks[0].deadline, ymd(2024, 1, 10));
    }

    #[test]
    fn id_sequence_survives_reopen() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("tasks.db");

        let last_id = {
            let db = Database::open(&path).expect("Failed to open database");
            db.insert("First life", ymd(2024, 1, 1)).unwrap();
            let id = db.insert("Second", ymd(2024, 1, 2)).unwrap();
            db.delete(id).unwrap();
            id
        };

        let db = Database::open(&path).expect("Failed to reopen database");
        let next = db.insert("Second life", ymd(2024, 1, 3)).unwrap();
        assert!(next > last_id);
    }

    #[test]
    fn open_fails_with_storage_unavailable_for_bad_location() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("missing").join("tasks.db");

        let result = Database::open(&path);
        assert!(matches!(result, Err(Error::StorageUnavailable { .. })));
    }
}
