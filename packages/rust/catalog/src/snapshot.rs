//! Offline catalog read from a JSON dump of a simulator response.

use std::path::{Path, PathBuf};

use bpdocs_shared::{BlueprintLibrary, BlueprintRecord, BpDocsError, Result};
use tracing::{debug, instrument};

use crate::{BlueprintFilter, BlueprintProvider};

/// Serves blueprints from a saved catalog file, filtering locally.
#[derive(Debug, Clone)]
pub struct SnapshotProvider {
    path: PathBuf,
}

impl SnapshotProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BlueprintProvider for SnapshotProvider {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn blueprints(&self, filter: &str) -> Result<Vec<BlueprintRecord>> {
        let filter = BlueprintFilter::new(filter)?;

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| BpDocsError::io(&self.path, e))?;

        let library: BlueprintLibrary = serde_json::from_str(&content).map_err(|e| {
            BpDocsError::validation(format!(
                "invalid catalog snapshot {}: {e}",
                self.path.display()
            ))
        })?;

        let total = library.blueprints.len();
        let matched: Vec<BlueprintRecord> = library
            .blueprints
            .into_iter()
            .filter(|bp| filter.matches(&bp.id))
            .collect();

        debug!(total, matched = matched.len(), pattern = filter.pattern(), "snapshot filtered");
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "blueprints": [
            {"id": "vehicle.car", "attributes": []},
            {"id": "vehicle.truck", "attributes": []},
            {"id": "walker.person", "attributes": []}
        ]
    }"#;

    fn write_snapshot(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn reads_whole_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let provider = SnapshotProvider::new(write_snapshot(&dir, CATALOG));

        let blueprints = provider.blueprints("*").await.unwrap();
        assert_eq!(blueprints.len(), 3);
    }

    #[tokio::test]
    async fn applies_filter_locally() {
        let dir = tempfile::tempdir().unwrap();
        let provider = SnapshotProvider::new(write_snapshot(&dir, CATALOG));

        let ids: Vec<String> = provider
            .blueprints("vehicle.*")
            .await
            .unwrap()
            .into_iter()
            .map(|bp| bp.id)
            .collect();
        assert_eq!(ids, vec!["vehicle.car", "vehicle.truck"]);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = SnapshotProvider::new(dir.path().join("absent.json"));

        let err = provider.blueprints("*").await.unwrap_err();
        assert!(matches!(err, BpDocsError::Io { .. }));
        assert!(!err.is_connection());
    }

    #[tokio::test]
    async fn malformed_snapshot_is_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = SnapshotProvider::new(write_snapshot(&dir, "{\"blueprints\": 4}"));

        let err = provider.blueprints("*").await.unwrap_err();
        assert!(err.to_string().contains("invalid catalog snapshot"));
    }
}
