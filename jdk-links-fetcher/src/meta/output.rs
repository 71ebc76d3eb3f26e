use crate::error::FetcherError;
use crate::platform::Platform;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateDocument {
    pub last_updated: DateTime<Utc>,
    pub jenv: ReleaseInfo,
    pub jdk: JdkCatalog,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseInfo {
    pub version: String,
    pub platforms: IndexMap<Platform, ReleaseAsset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseAsset {
    pub url: String,
    pub size: String,

    /// Always empty, the release API publishes no digests.
    pub sha256: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JdkCatalog {
    pub versions: Vec<u32>,
    pub recommended: Vec<u32>,
    pub distributions: IndexMap<String, DistributionEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionEntry {
    pub name: String,
    pub description: String,
    pub recommended: bool,
    pub versions: IndexMap<u32, IndexMap<Platform, PackageRecord>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRecord {
    pub url: String,
    pub size: String,
    pub sha256: String,
    pub java_version: String,
    pub distribution: String,
}

/// Human readable size with one decimal, in B, KB or MB (1024 based).
pub fn format_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;

    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

/// Write the document as indented JSON, replacing the file in one write.
pub async fn write_document(
    path: impl AsRef<Path>,
    document: &AggregateDocument,
) -> Result<(), FetcherError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let data = serde_json::to_vec_pretty(document)?;
    tokio::fs::write(path, data).await?;

    tracing::debug!("Wrote {}", path.display());

    Ok(())
}
