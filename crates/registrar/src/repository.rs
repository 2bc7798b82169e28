//! Record persistence over a key-value store.
//!
//! The whole record sequence lives as one JSON array under
//! [`STORAGE_KEY`]. Every write replaces the full array.

use tracing::{debug, trace};

use crate::error::Result;
use crate::record::StudentRecord;
use crate::storage::KeyValueStore;

/// Key holding the serialized record sequence.
pub const STORAGE_KEY: &str = "iei_students_data";

/// Loads and saves the ordered record sequence.
pub trait RecordRepository {
    /// Load every stored record, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load_all(&self) -> Result<Vec<StudentRecord>>;

    /// Replace the stored sequence with `records`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backing store fails.
    fn save_all(&self, records: &[StudentRecord]) -> Result<()>;

    /// Append one record to the end of the stored sequence.
    ///
    /// This is a load, push and save; it is not atomic across processes
    /// sharing the same store.
    ///
    /// # Errors
    ///
    /// Returns an error if loading or saving fails.
    fn append(&self, record: StudentRecord) -> Result<()> {
        let mut records = self.load_all()?;
        records.push(record);
        self.save_all(&records)
    }
}

/// [`RecordRepository`] writing JSON into a [`KeyValueStore`].
#[derive(Debug)]
pub struct StoreRepository<S> {
    store: S,
}

impl<S: KeyValueStore> StoreRepository<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The raw stored text, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    pub fn raw_entry(&self) -> Result<Option<String>> {
        self.store.get_item(STORAGE_KEY)
    }
}

impl<S: KeyValueStore> RecordRepository for StoreRepository<S> {
    fn load_all(&self) -> Result<Vec<StudentRecord>> {
        let Some(data) = self.store.get_item(STORAGE_KEY)? else {
            trace!("No storage entry under {STORAGE_KEY}");
            return Ok(Vec::new());
        };
        Ok(decode_records(&data))
    }

    fn save_all(&self, records: &[StudentRecord]) -> Result<()> {
        let data = serde_json::to_string(records)?;
        self.store.set_item(STORAGE_KEY, &data)?;
        debug!(count = records.len(), "Saved records");
        Ok(())
    }
}

/// Decode a stored entry.
///
/// Blank or undecodable text reads as no records.
#[must_use]
pub fn decode_records(data: &str) -> Vec<StudentRecord> {
    if data.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Option<Vec<StudentRecord>>>(data) {
        Ok(records) => records.unwrap_or_default(),
        Err(err) => {
            debug!("Ignoring unreadable storage entry: {err}");
            Vec::new()
        }
    }
}

/// Render records in the stored format, pretty-printed.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn export_json(records: &[StudentRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, SqliteStore};
    use chrono::{TimeZone, Utc};

    fn record(id: i64, name: &str) -> StudentRecord {
        StudentRecord {
            id,
            full_name: name.to_string(),
            enrollment_no: format!("EN{id:04}"),
            branch: "IT".to_string(),
            semester: "2".to_string(),
            email: format!("s{id}@college.edu"),
            phone: "9000000000".to_string(),
            created_at: Utc.timestamp_millis_opt(1_700_000_000_000 + id).unwrap(),
        }
    }

    #[test]
    fn test_load_absent_entry() {
        let repo = StoreRepository::new(MemoryStore::new());
        assert!(repo.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_load_empty_entry() {
        let repo = StoreRepository::new(MemoryStore::with_entry(STORAGE_KEY, ""));
        assert!(repo.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_load_null_entry() {
        let repo = StoreRepository::new(MemoryStore::with_entry(STORAGE_KEY, "null"));
        assert!(repo.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_load_malformed_entry_is_empty() {
        for bad in ["{not json", "{}", "42", r#"[{"id":"x"}]"#] {
            let repo = StoreRepository::new(MemoryStore::with_entry(STORAGE_KEY, bad));
            assert!(repo.load_all().unwrap().is_empty(), "entry {bad:?}");
        }
    }

    #[test]
    fn test_append_then_load_preserves_order_and_fields() {
        let repo = StoreRepository::new(MemoryStore::new());
        let originals: Vec<StudentRecord> = (1..=5).map(|i| record(i, &format!("S{i}"))).collect();

        for r in &originals {
            repo.append(r.clone()).unwrap();
        }

        assert_eq!(repo.load_all().unwrap(), originals);
    }

    #[test]
    fn test_load_is_idempotent() {
        let repo = StoreRepository::new(MemoryStore::new());
        repo.append(record(1, "One")).unwrap();
        repo.append(record(2, "Two")).unwrap();

        let first = repo.load_all().unwrap();
        let second = repo.load_all().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_append_over_malformed_entry_starts_fresh() {
        let repo = StoreRepository::new(MemoryStore::with_entry(STORAGE_KEY, "garbage"));
        repo.append(record(1, "One")).unwrap();
        assert_eq!(repo.load_all().unwrap(), vec![record(1, "One")]);
    }

    #[test]
    fn test_save_all_overwrites() {
        let repo = StoreRepository::new(MemoryStore::new());
        repo.save_all(&[record(1, "One"), record(2, "Two")]).unwrap();
        repo.save_all(&[record(3, "Three")]).unwrap();
        assert_eq!(repo.load_all().unwrap(), vec![record(3, "Three")]);
    }

    #[test]
    fn test_stored_entry_is_json_array() {
        let repo = StoreRepository::new(MemoryStore::new());
        repo.append(record(7, "Seven")).unwrap();

        let raw = repo.raw_entry().unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["fullName"], "Seven");
        assert_eq!(array[0]["enrollmentNo"], "EN0007");
    }

    #[test]
    fn test_sqlite_backed_roundtrip() {
        let repo = StoreRepository::new(SqliteStore::open_in_memory().unwrap());
        repo.append(record(1, "One")).unwrap();
        repo.append(record(2, "Two")).unwrap();

        let loaded = repo.load_all().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].full_name, "One");
        assert_eq!(loaded[1].full_name, "Two");
        assert_eq!(repo.store().keys().unwrap(), vec![STORAGE_KEY]);
    }

    #[test]
    fn test_export_json_matches_stored_shape() {
        let json = export_json(&[record(1, "One")]).unwrap();
        assert!(json.contains("\"fullName\": \"One\""));
        assert_eq!(decode_records(&json), vec![record(1, "One")]);
    }

    #[test]
    fn test_export_json_empty() {
        assert_eq!(export_json(&[]).unwrap(), "[]");
    }
}
