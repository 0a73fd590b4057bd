// ═══════════════════════════════════════════════════════════════════
// Storage Tests — MemoryBackend, FileBackend, RecentSearchStore
// ═══════════════════════════════════════════════════════════════════

use car_finance_core::errors::CoreError;
use car_finance_core::storage::backend::{FileBackend, MemoryBackend, StorageBackend};
use car_finance_core::storage::history::{RecentSearchStore, MAX_RECENT_SEARCHES, STORAGE_KEY};

// ═══════════════════════════════════════════════════════════════════
// MemoryBackend
// ═══════════════════════════════════════════════════════════════════

mod memory_backend {
    use super::*;

    #[test]
    fn absent_key_reads_none() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.read("missing").unwrap(), None);
    }

    #[test]
    fn write_then_read() {
        let mut backend = MemoryBackend::new();
        backend.write("k", "v").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn write_overwrites() {
        let mut backend = MemoryBackend::new();
        backend.write("k", "first").unwrap();
        backend.write("k", "second").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut backend = MemoryBackend::new();
        backend.write("k", "v").unwrap();
        backend.remove("k").unwrap();
        backend.remove("k").unwrap();
        assert_eq!(backend.read("k").unwrap(), None);
    }
}

// ═══════════════════════════════════════════════════════════════════
// FileBackend
// ═══════════════════════════════════════════════════════════════════

mod file_backend {
    use super::*;

    #[test]
    fn missing_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("store.json"));
        assert_eq!(backend.read("k").unwrap(), None);
    }

    #[test]
    fn write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().join("store.json"));
        backend.write("k", r#"["Toyota"]"#).unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some(r#"["Toyota"]"#));
    }

    #[test]
    fn values_persist_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut writer = FileBackend::new(&path);
        writer.write("k", "v").unwrap();

        let reader = FileBackend::new(&path);
        assert_eq!(reader.read("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn remove_deletes_only_that_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().join("store.json"));
        backend.write("a", "1").unwrap();
        backend.write("b", "2").unwrap();
        backend.remove("a").unwrap();
        assert_eq!(backend.read("a").unwrap(), None);
        assert_eq!(backend.read("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn unparseable_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json at all").unwrap();

        let backend = FileBackend::new(&path);
        let err = backend.read("k").unwrap_err();
        assert!(matches!(err, CoreError::Storage(_)));
    }
}

// ═══════════════════════════════════════════════════════════════════
// RecentSearchStore
// ═══════════════════════════════════════════════════════════════════

mod recent_searches {
    use super::*;

    fn store() -> RecentSearchStore {
        RecentSearchStore::new(Box::new(MemoryBackend::new()))
    }

    #[test]
    fn starts_empty() {
        assert!(store().all().is_empty());
    }

    #[test]
    fn records_most_recent_first() {
        let mut store = store();
        store.record("Toyota Yaris").unwrap();
        store.record("Honda Civic").unwrap();
        assert_eq!(store.all(), ["Honda Civic", "Toyota Yaris"]);
    }

    #[test]
    fn repeat_moves_entry_to_front() {
        let mut store = store();
        store.record("Toyota Yaris").unwrap();
        store.record("Honda Civic").unwrap();
        store.record("Toyota Yaris").unwrap();
        assert_eq!(store.all(), ["Toyota Yaris", "Honda Civic"]);
    }

    #[test]
    fn deduplication_is_case_insensitive() {
        let mut store = store();
        store.record("Toyota Yaris").unwrap();
        store.record("toyota yaris").unwrap();
        assert_eq!(store.all(), ["toyota yaris"]);
    }

    #[test]
    fn queries_are_trimmed() {
        let mut store = store();
        store.record("  Mazda 2  ").unwrap();
        assert_eq!(store.all(), ["Mazda 2"]);
    }

    #[test]
    fn blank_query_is_rejected() {
        let mut store = store();
        let err = store.record("   ").unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
        assert!(store.all().is_empty());
    }

    #[test]
    fn length_never_exceeds_the_bound() {
        let mut store = store();
        for i in 0..20 {
            store.record(&format!("query {i}")).unwrap();
            assert!(store.all().len() <= MAX_RECENT_SEARCHES);
        }
        // newest five survive, newest first
        assert_eq!(
            store.all(),
            ["query 19", "query 18", "query 17", "query 16", "query 15"]
        );
    }

    #[test]
    fn loads_previously_persisted_list() {
        let mut backend = MemoryBackend::new();
        backend
            .write(STORAGE_KEY, r#"["Honda Civic","Toyota Yaris"]"#)
            .unwrap();

        let store = RecentSearchStore::new(Box::new(backend));
        assert_eq!(store.all(), ["Honda Civic", "Toyota Yaris"]);
    }

    #[test]
    fn oversized_persisted_list_is_truncated_on_load() {
        let mut backend = MemoryBackend::new();
        backend
            .write(STORAGE_KEY, r#"["a","b","c","d","e","f","g"]"#)
            .unwrap();

        let store = RecentSearchStore::new(Box::new(backend));
        assert_eq!(store.all(), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn corrupted_persisted_data_resets_silently() {
        for corrupt in [r#"{"not":"a list"}"#, "[1,2,3]", "garbage", "null"] {
            let mut backend = MemoryBackend::new();
            backend.write(STORAGE_KEY, corrupt).unwrap();

            let mut store = RecentSearchStore::new(Box::new(backend));
            assert!(store.all().is_empty(), "survived corrupt data {corrupt:?}");

            // store is fully usable afterwards
            store.record("Toyota Yaris").unwrap();
            assert_eq!(store.all(), ["Toyota Yaris"]);
        }
    }

    #[test]
    fn mutations_persist_across_store_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut store = RecentSearchStore::new(Box::new(FileBackend::new(&path)));
        store.record("Toyota Yaris").unwrap();
        store.record("Honda Civic").unwrap();
        drop(store);

        let reloaded = RecentSearchStore::new(Box::new(FileBackend::new(&path)));
        assert_eq!(reloaded.all(), ["Honda Civic", "Toyota Yaris"]);
    }

    #[test]
    fn corrupted_backend_entry_is_cleared() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut backend = FileBackend::new(&path);
        backend.write(STORAGE_KEY, "definitely not json").unwrap();

        let store = RecentSearchStore::new(Box::new(FileBackend::new(&path)));
        assert!(store.all().is_empty());

        // the invalid entry was removed from the backend
        let check = FileBackend::new(&path);
        assert_eq!(check.read(STORAGE_KEY).unwrap(), None);
    }
}
