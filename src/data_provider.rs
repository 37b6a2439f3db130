/// Trait for providing score snapshots, abstracting over snapshot files and fixtures
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::fixtures;
use crate::types::Snapshot;

/// Snapshot loading errors
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Snapshot path is empty")]
    EmptyPath,
}

/// Source of score snapshots, implemented by file and fixture providers
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Fetch the current snapshot
    async fn snapshot(&self) -> Result<Snapshot, SnapshotError>;

    /// Human readable description of the source
    fn describe(&self) -> String;
}

/// Reads a JSON snapshot from disk on every fetch
pub struct FileSnapshotProvider {
    path: PathBuf,
}

impl FileSnapshotProvider {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, SnapshotError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(SnapshotError::EmptyPath);
        }
        Ok(Self { path })
    }
}

#[async_trait]
impl SnapshotProvider for FileSnapshotProvider {
    async fn snapshot(&self) -> Result<Snapshot, SnapshotError> {
        debug!("SNAPSHOT: Reading {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SnapshotError::Io {
                path: self.path.clone(),
                source,
            })?;
        parse_snapshot(&self.path, &content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse snapshot JSON, attributing errors to `path`
pub fn parse_snapshot(path: &Path, content: &str) -> Result<Snapshot, SnapshotError> {
    serde_json::from_str(content).map_err(|source| SnapshotError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns the fixture snapshot instead of reading a file
pub struct FixtureProvider;

#[async_trait]
impl SnapshotProvider for FixtureProvider {
    async fn snapshot(&self) -> Result<Snapshot, SnapshotError> {
        debug!("SNAPSHOT: Returning fixture snapshot");
        Ok(fixtures::sample_snapshot())
    }

    fn describe(&self) -> String {
        "demo fixtures".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameState;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("nhl-replay-{}-{}.json", name, std::process::id()))
    }

    #[tokio::test]
    async fn test_file_provider_reads_snapshot() {
        let path = temp_path("read");
        let json = serde_json::to_string(&fixtures::sample_snapshot()).unwrap();
        std::fs::write(&path, json).unwrap();

        let provider = FileSnapshotProvider::new(&path).unwrap();
        let snapshot = provider.snapshot().await.unwrap();
        assert_eq!(snapshot, fixtures::sample_snapshot());
        assert_eq!(provider.describe(), path.display().to_string());

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_file_provider_missing_file() {
        let provider = FileSnapshotProvider::new(temp_path("missing")).unwrap();
        let err = provider.snapshot().await.unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
    }

    #[test]
    fn test_parse_error_names_path() {
        let err = parse_snapshot(Path::new("scores.json"), "{ not json").unwrap_err();
        assert!(matches!(err, SnapshotError::Parse { .. }));
        assert!(err.to_string().starts_with("Failed to parse snapshot scores.json"));
    }

    #[test]
    fn test_parse_minimal_snapshot() {
        let json = r#"{
            "games": [{
                "teams": { "away": { "abbreviation": "PIT" }, "home": { "abbreviation": "WSH" } },
                "status": {
                    "state": "LIVE",
                    "progress": {
                        "currentPeriod": 2,
                        "currentPeriodOrdinal": "2nd",
                        "currentPeriodTimeRemaining": { "min": 4, "sec": 56, "pretty": "04:56" }
                    }
                },
                "goals": [{ "period": "1", "min": 8, "sec": 44, "team": "PIT", "scorer": { "player": "Sidney Crosby", "seasonTotal": 18 } }]
            }]
        }"#;
        let snapshot = parse_snapshot(Path::new("inline"), json).unwrap();
        assert_eq!(snapshot.date, None);
        assert_eq!(snapshot.games[0].status.state, GameState::Live);
        assert_eq!(snapshot.games[0].goals[0].scorer.season_total, Some(18));
    }

    #[test]
    fn test_empty_path_rejected() {
        assert!(matches!(FileSnapshotProvider::new(""), Err(SnapshotError::EmptyPath)));
    }

    #[tokio::test]
    async fn test_fixture_provider() {
        let snapshot = FixtureProvider.snapshot().await.unwrap();
        assert_eq!(snapshot.games.len(), fixtures::sample_snapshot().games.len());
    }
}
