//! File-backed implementation of the comparison persister port.
//!
//! One state file stands in for the single durable key-value slot the
//! comparison set owns. Reads that fail for any reason are reported as
//! "nothing stored"; writes go through a sibling temp file and an
//! atomic rename so the slot always holds a whole value.

use std::path::{Path, PathBuf};
use stayscout_domain::ComparePersister;
use tracing::warn;

/// [`ComparePersister`] storing the serialized set in a single file.
pub struct FileComparePersister {
    path: PathBuf,
}

impl FileComparePersister {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the state file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, value: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &self.path)
    }
}

impl ComparePersister for FileComparePersister {
    fn load(&self) -> Option<String> {
        std::fs::read_to_string(&self.path).ok()
    }

    fn save(&self, value: &str) {
        if let Err(e) = self.write(value) {
            warn!(
                "Could not save comparison state to {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_absent_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let persister = FileComparePersister::new(dir.path().join("compare.json"));
        assert!(persister.load().is_none());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let persister = FileComparePersister::new(dir.path().join("compare.json"));

        persister.save(r#"[{"id":"p1"}]"#);
        assert_eq!(persister.load().as_deref(), Some(r#"[{"id":"p1"}]"#));

        persister.save("[]");
        assert_eq!(persister.load().as_deref(), Some("[]"));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("state").join("deep").join("compare.json");
        let persister = FileComparePersister::new(&nested);

        persister.save("[]");
        assert!(nested.exists());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compare.json");
        FileComparePersister::new(&path).save("[]");
        assert!(!path.with_extension("tmp").exists());
    }

    mod with_compare_store {
        use super::*;
        use stayscout_domain::{
            CompareStore, GenderPolicy, Location, Property, PropertyKind, RoomDetails, RoomType,
        };

        fn listing(id: &str) -> Property {
            Property::new(
                id,
                format!("Listing {}", id),
                PropertyKind::Hostel,
                3200.0,
                Location {
                    address: "3 FC Road".to_string(),
                    city: "Pune".to_string(),
                    state: "MH".to_string(),
                    zip_code: "411004".to_string(),
                    coordinates: None,
                },
                RoomDetails {
                    room_type: RoomType::Shared,
                    bedrooms: 1,
                    bathrooms: 1,
                    gender_policy: GenderPolicy::Male,
                    max_occupancy: 3,
                    room_size: 120,
                },
            )
        }

        #[test]
        fn test_comparison_survives_process_restart() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("compare.json");

            {
                let mut store =
                    CompareStore::new(Box::new(FileComparePersister::new(&path)));
                store.add(listing("a"));
                store.add(listing("b"));
            }

            let restored = CompareStore::new(Box::new(FileComparePersister::new(&path)));
            let ids: Vec<&str> = restored.properties().iter().map(|p| p.id.as_str()).collect();
            assert_eq!(ids, ["a", "b"]);
        }

        #[test]
        fn test_corrupt_state_file_restores_to_empty() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("compare.json");
            std::fs::write(&path, "{{{{ definitely not json").unwrap();

            let store = CompareStore::new(Box::new(FileComparePersister::new(&path)));
            assert!(store.is_empty());
        }
    }
}
