use crate::config::{load_config, ConfigMap};
use crate::domain::model::Record;
use crate::domain::ports::RecordSource;
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{self, validate_capacity, Validate};
use std::fmt;
use std::path::Path;

pub const MAX_RECORDS: usize = 100;
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// An ordered collection of records plus the configuration it was built with.
///
/// Records added through [`Directory::with_records`] are taken as-is, so two
/// records may share an id; lookups then return the earlier one.
/// [`Directory::insert`] refuses duplicates.
#[derive(Clone, Default)]
pub struct Directory {
    config: ConfigMap,
    records: Vec<Record>,
}

impl Directory {
    pub fn new(config: ConfigMap) -> Self {
        Self {
            config,
            records: Vec::new(),
        }
    }

    pub fn with_records(config: ConfigMap, records: Vec<Record>) -> Self {
        Self { config, records }
    }

    /// Builds an empty directory from a JSON object file.
    ///
    /// Read and parse failures are returned unchanged.
    pub fn from_config<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = load_config(&path)?;
        tracing::info!(
            "Loaded directory config from {} ({} keys)",
            path.as_ref().display(),
            config.len()
        );
        Ok(Self::new(config))
    }

    pub fn validate_address(address: &str) -> bool {
        validation::validate_address(address)
    }

    pub fn insert(&mut self, record: Record) -> Result<()> {
        validate_capacity(self.records.len(), MAX_RECORDS)?;
        record.validate()?;

        if self.find_by_id(record.id).is_some() {
            tracing::warn!("Rejected record {}: id already present", record.id);
            return Err(DirectoryError::DuplicateId { id: record.id });
        }

        tracing::debug!("Inserted record {}", record.id);
        self.records.push(record);
        Ok(())
    }

    pub fn config(&self) -> &ConfigMap {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordSource for Directory {
    fn records(&self) -> &[Record] {
        &self.records
    }
}

// Config contents stay out of debug output.
impl fmt::Debug for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Directory")
            .field("records", &self.records.len())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Directory with {} records", self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Directory {
        Directory::with_records(
            ConfigMap::new(),
            vec![
                Record::new(1, "A", "a@example.com"),
                Record::new(2, "B", "b@example.com"),
            ],
        )
    }

    #[test]
    fn test_find_by_id_hit_and_miss() {
        let directory = sample();

        let found = directory.find_by_id(2).unwrap();
        assert_eq!(found.name, "B");
        assert!(directory.find_by_id(3).is_none());
    }

    #[test]
    fn test_find_by_id_on_empty_directory() {
        let directory = Directory::default();
        assert!(directory.find_by_id(0).is_none());
        assert!(directory.find_by_id(-1).is_none());
    }

    #[test]
    fn test_duplicate_ids_first_match_wins() {
        let directory = Directory::with_records(
            ConfigMap::new(),
            vec![
                Record::new(5, "First", "first@example.com"),
                Record::new(5, "Second", "second@example.com"),
            ],
        );

        assert_eq!(directory.find_by_id(5).unwrap().name, "First");
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn test_insert_rejects_duplicate() {
        let mut directory = sample();
        let result = directory.insert(Record::new(1, "Again", "again@example.com"));

        assert!(matches!(result, Err(DirectoryError::DuplicateId { id: 1 })));
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn test_insert_rejects_invalid_address() {
        let mut directory = Directory::default();
        let result = directory.insert(Record::new(1, "A", "not-an-address"));

        assert!(matches!(result, Err(DirectoryError::ValidationError { .. })));
        assert!(directory.is_empty());
    }

    #[test]
    fn test_insert_stops_at_capacity() {
        let mut directory = Directory::default();
        for id in 0..MAX_RECORDS as i64 {
            directory
                .insert(Record::new(id, format!("R{id}"), format!("r{id}@example.com")))
                .unwrap();
        }

        let result = directory.insert(Record::new(1000, "Extra", "extra@example.com"));
        assert!(matches!(
            result,
            Err(DirectoryError::CapacityExceeded { limit: MAX_RECORDS })
        ));
        assert_eq!(directory.len(), MAX_RECORDS);
    }

    #[test]
    fn test_display() {
        assert_eq!(Directory::default().to_string(), "Directory with 0 records");
        assert_eq!(sample().to_string(), "Directory with 2 records");
    }

    #[test]
    fn test_debug_hides_config_and_records() {
        let mut config = ConfigMap::new();
        config.insert("secret".to_string(), serde_json::Value::from("hunter2"));
        let directory =
            Directory::with_records(config, vec![Record::new(1, "A", "a@example.com")]);

        assert_eq!(format!("{:?}", directory), "Directory { records: 1, .. }");
    }

    #[test]
    fn test_api_version_matches_package_version() {
        assert_eq!(API_VERSION, "1.0.0");
    }

    #[test]
    fn test_validate_address_without_instance() {
        assert!(Directory::validate_address("user@example.com"));
        assert!(!Directory::validate_address("user@@example.com"));
    }
}
