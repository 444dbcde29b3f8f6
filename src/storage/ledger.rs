//! Seen-reviews ledger.
//!
//! A persisted set of lecturer ids this profile has already reviewed, used
//! to block duplicate submissions. Stored as a plain JSON array of strings.
//! The ledger grows monotonically during normal use; `clear` exists as an
//! explicit maintenance operation.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};

/// File-backed set of already-reviewed lecturer ids.
#[derive(Debug, Clone)]
pub struct ReviewLedger {
    path: PathBuf,
    ids: Vec<String>,
}

impl ReviewLedger {
    /// Load the ledger from disk. A missing file yields an empty ledger.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let ids = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(AppError::Io(e)),
        };
        Ok(Self { path, ids })
    }

    /// Whether this profile already reviewed the lecturer.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|known| known == id)
    }

    /// All recorded ids, in the order they were marked.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Record a lecturer as reviewed and persist. Idempotent.
    pub async fn mark(&mut self, id: &str) -> Result<()> {
        if !self.contains(id) {
            self.ids.push(id.to_string());
        }
        self.save().await
    }

    /// Forget every recorded review and persist the empty ledger.
    pub async fn clear(&mut self) -> Result<()> {
        self.ids.clear();
        self.save().await
    }

    /// Write the ledger atomically (write to temp, then rename).
    async fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let bytes = serde_json::to_vec_pretty(&self.ids)?;
        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(&bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let ledger = ReviewLedger::load(tmp.path().join("reviewed.json"))
            .await
            .unwrap();
        assert!(ledger.ids().is_empty());
    }

    #[tokio::test]
    async fn test_mark_persists_across_reload() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("reviewed.json");

        let mut ledger = ReviewLedger::load(&path).await.unwrap();
        ledger.mark("12").await.unwrap();
        ledger.mark("7").await.unwrap();

        let reloaded = ReviewLedger::load(&path).await.unwrap();
        assert!(reloaded.contains("12"));
        assert!(reloaded.contains("7"));
        assert!(!reloaded.contains("99"));
        assert_eq!(reloaded.ids(), &["12".to_string(), "7".to_string()]);
    }

    #[tokio::test]
    async fn test_mark_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let mut ledger = ReviewLedger::load(tmp.path().join("reviewed.json"))
            .await
            .unwrap();

        ledger.mark("12").await.unwrap();
        ledger.mark("12").await.unwrap();
        assert_eq!(ledger.ids().len(), 1);
    }

    #[tokio::test]
    async fn test_clear() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("reviewed.json");

        let mut ledger = ReviewLedger::load(&path).await.unwrap();
        ledger.mark("12").await.unwrap();
        ledger.clear().await.unwrap();

        let reloaded = ReviewLedger::load(&path).await.unwrap();
        assert!(reloaded.ids().is_empty());
    }

    #[tokio::test]
    async fn test_file_is_plain_json_array() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("reviewed.json");

        let mut ledger = ReviewLedger::load(&path).await.unwrap();
        ledger.mark("12").await.unwrap();

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!(["12"]));
    }
}
