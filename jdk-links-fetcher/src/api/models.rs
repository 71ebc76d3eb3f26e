use crate::platform::Platform;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct GithubRelease {
    pub tag_name: String,

    #[serde(default)]
    pub assets: Vec<GithubAsset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubAsset {
    pub name: String,
    pub browser_download_url: String,
    pub size: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MajorVersionsResponse {
    #[serde(default)]
    pub result: Vec<MajorVersion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MajorVersion {
    pub major_version: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackagesResponse {
    /// The catalog answers `null` as well as `[]` when nothing matches.
    #[serde(default)]
    pub result: Option<Vec<DiscoPackage>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscoPackage {
    pub links: DiscoPackageLinks,

    #[serde(default)]
    pub size: u64,

    #[serde(default)]
    pub checksum: Option<String>,

    pub java_version: String,
    pub distribution: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscoPackageLinks {
    pub pkg_download_redirect: String,
}

/// One (distribution, version, platform) lookup.
#[derive(Debug, Clone, Copy)]
pub struct PackageQuery<'a> {
    pub distribution: &'a str,
    pub version: u32,
    pub platform: Platform,
}
