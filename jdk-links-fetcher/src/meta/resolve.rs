use crate::api::{CatalogApi, DiscoPackage, PackageQuery};
use crate::meta::output::{PackageRecord, format_bytes};
use crate::statistics::StatisticsCollector;

/// Resolve one lookup, or skip it.
///
/// Never fails the run: an empty result or a request error is recorded and yields `None`.
#[tracing::instrument(skip(api, statistics))]
pub(super) async fn resolve_package(
    api: &CatalogApi,
    statistics: &mut StatisticsCollector,
    query: PackageQuery<'_>,
) -> Option<PackageRecord> {
    let task_name = format!(
        "{} {} on {}",
        query.distribution, query.version, query.platform
    );

    match api.fetch_package(&query).await {
        Ok(Some(package)) => {
            statistics.record_resolved();
            Some(package_record(package))
        }
        Ok(None) => {
            statistics.record_unavailable(task_name);
            None
        }
        Err(err) => {
            statistics.record_failed(task_name, Box::new(err));
            None
        }
    }
}

fn package_record(package: DiscoPackage) -> PackageRecord {
    PackageRecord {
        url: package.links.pkg_download_redirect,
        size: format_bytes(package.size),
        sha256: package.checksum.unwrap_or_default(),
        java_version: package.java_version,
        distribution: package.distribution,
    }
}
