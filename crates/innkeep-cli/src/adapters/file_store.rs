//! JSON File Store
//!
//! Flat-file implementation of `ReservationRepository`. Each save rewrites
//! the whole snapshot; each load reads it back. The file carries a version
//! tag so a format change is detected instead of misread.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use innkeep::{DomainError, Reservation, ReservationRepository};

const SNAPSHOT_VERSION: u32 = 1;

/// On-disk envelope for the reservation snapshot
#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    version: u32,
    reservations: Vec<Reservation>,
}

/// File-backed reservation store
pub struct JsonReservationRepository {
    path: PathBuf,
}

impl JsonReservationRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ReservationRepository for JsonReservationRepository {
    fn save_all(&self, reservations: &[Reservation]) -> Result<(), DomainError> {
        let snapshot = SnapshotFile {
            version: SNAPSHOT_VERSION,
            reservations: reservations.to_vec(),
        };

        let content = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| DomainError::Repository(format!("Failed to serialize snapshot: {e}")))?;

        fs::write(&self.path, content).map_err(|e| {
            DomainError::Repository(format!("Failed to write {:?}: {e}", self.path))
        })?;

        tracing::debug!(
            "Saved {} reservation(s) to {:?}",
            reservations.len(),
            self.path
        );
        Ok(())
    }

    fn load_all(&self) -> Result<Vec<Reservation>, DomainError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            DomainError::Repository(format!("Failed to read {:?}: {e}", self.path))
        })?;

        let snapshot: SnapshotFile = serde_json::from_str(&content).map_err(|e| {
            DomainError::Repository(format!("Failed to parse {:?}: {e}", self.path))
        })?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(DomainError::Repository(format!(
                "Unsupported snapshot version {} in {:?}",
                snapshot.version, self.path
            )));
        }

        Ok(snapshot.reservations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    /// Unique throwaway path per test; removed on drop
    struct TempStore {
        path: PathBuf,
    }

    impl TempStore {
        fn new() -> Self {
            let path = std::env::temp_dir().join(format!(
                "innkeep-store-test-{}-{}.json",
                std::process::id(),
                COUNTER.fetch_add(1, Ordering::SeqCst)
            ));
            Self { path }
        }

        fn repo(&self) -> JsonReservationRepository {
            JsonReservationRepository::new(self.path.clone())
        }
    }

    impl Drop for TempStore {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.path);
        }
    }

    fn sample_reservations() -> Vec<Reservation> {
        vec![
            Reservation::new(
                1,
                101,
                "Alice".to_string(),
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
            ),
            Reservation::new(
                2,
                201,
                "Bob".to_string(),
                NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
                NaiveDate::from_ymd_opt(2024, 2, 12).unwrap(),
            ),
        ]
    }

    #[test]
    fn saved_snapshot_loads_back_identically() {
        let store = TempStore::new();
        let repo = store.repo();
        let reservations = sample_reservations();

        repo.save_all(&reservations).unwrap();
        let loaded = repo.load_all().unwrap();

        assert_eq!(loaded, reservations);
    }

    #[test]
    fn save_overwrites_the_previous_snapshot() {
        let store = TempStore::new();
        let repo = store.repo();

        repo.save_all(&sample_reservations()).unwrap();
        repo.save_all(&sample_reservations()[..1]).unwrap();

        assert_eq!(repo.load_all().unwrap().len(), 1);
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let store = TempStore::new();
        let repo = store.repo();

        assert!(repo.load_all().unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_is_an_error_not_empty() {
        let store = TempStore::new();
        fs::write(&store.path, "not a snapshot").unwrap();

        let result = store.repo().load_all();

        assert!(matches!(result, Err(DomainError::Repository(_))));
    }

    #[test]
    fn version_mismatch_is_rejected() {
        let store = TempStore::new();
        fs::write(&store.path, r#"{"version": 99, "reservations": []}"#).unwrap();

        let result = store.repo().load_all();

        assert!(matches!(result, Err(DomainError::Repository(_))));
    }
}
