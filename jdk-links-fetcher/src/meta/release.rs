use crate::api::{GithubRelease, MajorVersionsResponse};
use crate::catalog::MIN_MAJOR_VERSION;
use crate::meta::output::{ReleaseAsset, ReleaseInfo, format_bytes};
use crate::platform::Platform;
use indexmap::IndexMap;

/// Pick the asset of every known platform out of a jenv release.
pub(super) fn release_info(release: &GithubRelease) -> ReleaseInfo {
    let tag = release.tag_name.as_str();
    let version = tag.strip_prefix('v').unwrap_or(tag).to_owned();

    let mut platforms = IndexMap::new();
    for platform in Platform::ALL {
        let token = platform.release_asset_token();

        let Some(asset) = release.assets.iter().find(|a| a.name.contains(token)) else {
            tracing::debug!("Release {} has no asset for {}", tag, platform);
            continue;
        };

        platforms.insert(
            platform,
            ReleaseAsset {
                url: asset.browser_download_url.clone(),
                size: format_bytes(asset.size),
                sha256: String::new(),
            },
        );
    }

    ReleaseInfo { version, platforms }
}

pub(super) fn maintained_versions(response: &MajorVersionsResponse) -> Vec<u32> {
    response
        .result
        .iter()
        .map(|v| v.major_version)
        .filter(|v| *v >= MIN_MAJOR_VERSION)
        .collect()
}
