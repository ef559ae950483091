use super::*;
use tempfile::TempDir;

mod common {
    use super::*;

    pub(super) fn create_test_store() -> (ListStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            base_path: temp_dir.path().to_path_buf(),
        };
        let mut store = ListStore::new(&config);
        store.initialize();
        (store, temp_dir)
    }

    pub(super) fn store_with(paths: &[&str]) -> (ListStore, TempDir) {
        let (mut store, temp) = create_test_store();
        for path in paths {
            store.add(path).unwrap();
        }
        (store, temp)
    }

    pub(super) fn paths(store: &ListStore) -> Vec<String> {
        store.get_all().to_vec()
    }
}

mod add {
    use super::common::*;
    use super::*;

    #[test]
    fn test_add_rejects_duplicates() {
        let (mut store, _temp) = create_test_store();
        store.add("/a").unwrap();
        store.add("/b").unwrap();
        let result = store.add("/a");

        assert_eq!(result, Err(ValidationError::DuplicatePath("/a".to_string())));
        assert_eq!(paths(&store), ["/a", "/b"]);
        assert!(store.is_dirty());
    }

    #[test]
    fn test_add_rejects_empty_path() {
        let (mut store, _temp) = create_test_store();
        assert_eq!(store.add(""), Err(ValidationError::EmptyPath));
        assert!(store.is_empty());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_duplicate_add_does_not_dirty_clean_store() {
        let (mut store, _temp) = store_with(&["/a"]);
        store.save_default_snapshot().unwrap();
        store.add("/a").unwrap_err();
        assert!(!store.is_dirty());
    }
}

mod get {
    use super::common::*;

    #[test]
    fn test_get_by_index_bounds() {
        let (store, _temp) = store_with(&["/a", "/b"]);
        assert_eq!(store.get_by_index(0), None);
        assert_eq!(store.get_by_index(1), Some("/a"));
        assert_eq!(store.get_by_index(2), Some("/b"));
        assert_eq!(store.get_by_index(3), None);
    }

    #[test]
    fn test_get_all_is_independent_copy() {
        let (mut store, _temp) = store_with(&["/a"]);
        let mut copy = store.get_all();
        copy.push_unique("/z");
        copy.clear();

        assert_eq!(paths(&store), ["/a"]);
        store.add("/b").unwrap();
        assert!(copy.is_empty());
    }
}

mod delete_by_index {
    use super::common::*;
    use super::*;

    #[test]
    fn test_delete_middle_entry() {
        let (mut store, _temp) = store_with(&["/a", "/b", "/c"]);
        assert_eq!(store.delete_by_index(2).unwrap(), "/b");
        assert_eq!(paths(&store), ["/a", "/c"]);
        assert_eq!(store.get_by_index(2), Some("/c"));
    }

    #[test]
    fn test_delete_out_of_range_changes_nothing() {
        let (mut store, _temp) = store_with(&["/a"]);
        store.save_default_snapshot().unwrap();

        for index in [0, 2] {
            let result = store.delete_by_index(index);
            assert_eq!(
                result,
                Err(ValidationError::IndexOutOfRange { index, len: 1 })
            );
        }
        assert_eq!(paths(&store), ["/a"]);
        assert!(!store.is_dirty());
    }
}

mod reorder {
    use super::common::*;
    use super::*;

    #[test]
    fn test_reorder_first_to_last() {
        let (mut store, _temp) = store_with(&["/a", "/b", "/c"]);
        store.reorder(1, 3).unwrap();
        assert_eq!(paths(&store), ["/b", "/c", "/a"]);
    }

    #[test]
    fn test_reorder_back_restores_order() {
        let (mut store, _temp) = store_with(&["/a", "/b", "/c", "/d"]);
        store.reorder(1, 3).unwrap();
        store.reorder(3, 1).unwrap();
        assert_eq!(paths(&store), ["/a", "/b", "/c", "/d"]);
    }

    #[test]
    fn test_reorder_rejects_same_position() {
        let (mut store, _temp) = store_with(&["/a", "/b"]);
        assert_eq!(store.reorder(2, 2), Err(ValidationError::SamePosition(2)));
    }

    #[test]
    fn test_reorder_rejects_out_of_range() {
        let (mut store, _temp) = store_with(&["/a", "/b"]);
        store.reorder(1, 3).unwrap_err();
        store.reorder(0, 1).unwrap_err();
        assert_eq!(paths(&store), ["/a", "/b"]);
    }
}

mod save_as {
    use super::common::*;
    use super::*;

    #[test]
    fn test_save_as_then_load_round_trips() {
        let (mut store, _temp) = store_with(&["/a", "/b"]);
        store.save_as("work").unwrap();

        store.clear();
        store.add("/other").unwrap();
        store.load("work").unwrap();

        assert_eq!(paths(&store), ["/a", "/b"]);
    }

    #[test]
    fn test_save_as_empty_list_round_trips() {
        let (mut store, _temp) = create_test_store();
        store.save_as("empty").unwrap();
        store.add("/a").unwrap();

        store.load("empty").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_as_sets_name_and_clears_dirty() {
        let (mut store, temp) = store_with(&["/a"]);
        assert!(store.is_dirty());

        let name = store.save_as("work").unwrap();

        assert_eq!(name.as_str(), "work");
        assert_eq!(store.current_list_name(), Some(&name));
        assert!(!store.is_dirty());
        assert!(temp.path().join("work.json").exists());
        assert!(temp.path().join("_current_list.json").exists());
    }

    #[test]
    fn test_save_as_is_clean_even_when_snapshot_write_fails() {
        let (mut store, temp) = store_with(&["/a"]);
        std::fs::create_dir(temp.path().join("_current_list.json")).unwrap();

        store.save_as("work").unwrap();

        assert!(!store.is_dirty());
        let saved = std::fs::read_to_string(temp.path().join("work.json")).unwrap();
        assert_eq!(saved, r#"["/a"]"#);
    }

    #[test]
    fn test_save_as_rejects_empty_and_reserved_names() {
        let (mut store, temp) = store_with(&["/a"]);

        let empty = store.save_as("");
        assert!(matches!(
            empty,
            Err(StoreError::Validation(ValidationError::EmptyName))
        ));
        let reserved = store.save_as("_current_list");
        assert!(matches!(
            reserved,
            Err(StoreError::Validation(ValidationError::ReservedName(_)))
        ));

        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
        assert_eq!(store.current_list_name(), None);
        assert!(store.is_dirty());
    }

    #[test]
    fn test_save_as_rejects_path_like_names() {
        let (mut store, _temp) = store_with(&["/a"]);
        let result = store.save_as("../escape");
        assert!(matches!(
            result,
            Err(StoreError::Validation(ValidationError::InvalidName(_)))
        ));
    }

    #[test]
    fn test_save_as_write_failure_leaves_memory_unchanged() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let mut store = ListStore::new(&Config {
            base_path: blocker.join("lists"),
        });
        store.initialize();
        store.add("/a").unwrap();

        let result = store.save_as("work");

        assert!(matches!(result, Err(StoreError::Storage(_))));
        assert_eq!(store.current_list_name(), None);
        assert!(store.is_dirty());
    }
}

mod save_default_snapshot {
    use super::common::*;
    use super::*;

    #[test]
    fn test_clean_store_does_not_write() {
        let (mut store, temp) = create_test_store();
        assert!(!store.save_default_snapshot().unwrap());
        assert!(!temp.path().join("_current_list.json").exists());
    }

    #[test]
    fn test_dirty_store_writes_and_clears_flag() {
        let (mut store, temp) = store_with(&["/a", "/b"]);
        assert!(store.save_default_snapshot().unwrap());
        assert!(!store.is_dirty());

        let content = std::fs::read_to_string(temp.path().join("_current_list.json")).unwrap();
        assert_eq!(content, r#"["/a","/b"]"#);
    }

    #[test]
    fn test_snapshot_survives_restart() {
        let (mut store, temp) = store_with(&["/a", "/b"]);
        store.save_default_snapshot().unwrap();

        let mut restarted = ListStore::new(&Config {
            base_path: temp.path().to_path_buf(),
        });
        restarted.initialize();
        assert_eq!(paths(&restarted), ["/a", "/b"]);
        assert!(!restarted.is_dirty());
        assert_eq!(restarted.current_list_name(), None);
    }
}

mod load {
    use super::common::*;
    use super::*;

    #[test]
    fn test_load_missing_is_not_found() {
        let (mut store, _temp) = store_with(&["/a"]);
        let result = store.load("nope");
        assert!(matches!(result, Err(StoreError::NotFound(name)) if name == "nope"));
        assert_eq!(paths(&store), ["/a"]);
        assert!(store.is_dirty());
    }

    #[test]
    fn test_load_corrupt_file_is_not_found() {
        let (mut store, temp) = store_with(&["/a"]);
        std::fs::write(temp.path().join("broken.json"), "{not a list").unwrap();

        let result = store.load("broken");
        assert!(matches!(result, Err(StoreError::NotFound(_))));
        assert_eq!(paths(&store), ["/a"]);
    }

    #[test]
    fn test_load_replaces_list_and_writes_snapshot() {
        let (mut store, temp) = store_with(&["/x"]);
        std::fs::write(temp.path().join("work.json"), r#"["/a","/a","/b"]"#).unwrap();

        let name = store.load("work").unwrap();

        assert_eq!(store.current_list_name(), Some(&name));
        assert_eq!(paths(&store), ["/a", "/a", "/b"]);
        assert!(!store.is_dirty());
        let snapshot = std::fs::read_to_string(temp.path().join("_current_list.json")).unwrap();
        assert_eq!(snapshot, r#"["/a","/a","/b"]"#);
    }

    #[test]
    fn test_load_is_clean_even_when_snapshot_write_fails() {
        let (mut store, temp) = create_test_store();
        std::fs::write(temp.path().join("work.json"), r#"["/a"]"#).unwrap();
        std::fs::create_dir(temp.path().join("_current_list.json")).unwrap();
        store.add("/x").unwrap();

        store.load("work").unwrap();

        assert_eq!(paths(&store), ["/a"]);
        assert!(!store.is_dirty());
        assert!(temp.path().join("_current_list.json").is_dir());
    }

    #[test]
    fn test_load_rejects_reserved_name() {
        let (mut store, _temp) = create_test_store();
        let result = store.load("_current_list");
        assert!(matches!(
            result,
            Err(StoreError::Validation(ValidationError::ReservedName(_)))
        ));
    }
}

mod delete_saved {
    use super::common::*;
    use super::*;

    #[test]
    fn test_delete_requires_confirmation() {
        let (mut store, temp) = store_with(&["/a"]);
        store.save_as("work").unwrap();

        let result = store.delete_saved("work", |_| false);
        assert!(matches!(result, Err(StoreError::Cancelled(_))));
        assert!(temp.path().join("work.json").exists());
    }

    #[test]
    fn test_delete_current_list_clears_name_only() {
        let (mut store, temp) = store_with(&["/a"]);
        store.save_as("work").unwrap();

        let mut asked = None;
        store
            .delete_saved("work", |name| {
                asked = Some(name.to_string());
                true
            })
            .unwrap();

        assert_eq!(asked.as_deref(), Some("work"));
        assert!(!temp.path().join("work.json").exists());
        assert_eq!(store.current_list_name(), None);
        assert_eq!(paths(&store), ["/a"]);
    }

    #[test]
    fn test_delete_other_list_keeps_current_name() {
        let (mut store, _temp) = store_with(&["/a"]);
        store.save_as("other").unwrap();
        store.save_as("work").unwrap();

        store.delete_saved("other", |_| true).unwrap();
        assert_eq!(store.current_list_name().map(|n| n.as_str()), Some("work"));
    }

    #[test]
    fn test_delete_missing_does_not_prompt() {
        let (mut store, _temp) = create_test_store();
        let result = store.delete_saved("nope", |_| panic!("should not prompt"));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_delete_rejects_reserved_name() {
        let (mut store, _temp) = store_with(&["/a"]);
        store.save_default_snapshot().unwrap();
        let result = store.delete_saved("_current_list", |_| true);
        assert!(matches!(
            result,
            Err(StoreError::Validation(ValidationError::ReservedName(_)))
        ));
    }
}

mod list_saved_names {
    use super::common::*;

    #[test]
    fn test_names_are_sorted_and_exclude_snapshot() {
        let (mut store, _temp) = store_with(&["/a"]);
        store.save_as("zeta").unwrap();
        store.save_as("alpha").unwrap();
        store.save_as("mid").unwrap();

        let names: Vec<String> = store
            .list_saved_names()
            .unwrap()
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(names, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_no_saved_lists() {
        let (store, _temp) = create_test_store();
        assert!(store.list_saved_names().unwrap().is_empty());
    }
}

mod initialize {
    use super::*;

    #[test]
    fn test_corrupt_snapshot_starts_empty() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("_current_list.json"), "[1, 2").unwrap();

        let mut store = ListStore::new(&Config {
            base_path: temp.path().to_path_buf(),
        });
        store.initialize();

        assert!(store.is_empty());
        assert!(!store.is_dirty());
    }
}
