pub mod output;
mod release;
mod resolve;

use crate::api::{CatalogApi, PackageQuery};
use crate::catalog::{DISTRIBUTIONS, Distribution, RECOMMENDED_VERSIONS};
use crate::config::FetcherConfig;
use crate::error::FetcherError;
use crate::meta::output::{AggregateDocument, DistributionEntry, JdkCatalog};
use crate::meta::release::{maintained_versions, release_info};
use crate::meta::resolve::resolve_package;
use crate::platform::Platform;
use crate::statistics::{Statistics, StatisticsCollector};
use chrono::Utc;
use indexmap::IndexMap;
use indicatif::ProgressStyle;
use std::time::Duration;
use tracing_indicatif::span_ext::IndicatifSpanExt as _;

pub struct LinksProcessor {
    api: CatalogApi,
    request_pacing: Duration,
}

impl LinksProcessor {
    /// Prepare the processor.
    pub fn new(config: &FetcherConfig) -> Result<Self, FetcherError> {
        let api = CatalogApi::new(config)?;

        Ok(Self {
            api,
            request_pacing: config.request_pacing,
        })
    }

    /// Fetch everything the landing page needs.
    ///
    /// Fails only if the release or the maintained versions can not be fetched,
    /// individual packages that can not be resolved are left out.
    pub async fn collect(&self) -> Result<(AggregateDocument, Statistics), FetcherError> {
        tracing::info!("Fetching JEnv releases...");
        let release = self.api.fetch_latest_release().await?;
        let jenv = release_info(&release);
        tracing::info!("JEnv version {} fetched", jenv.version);

        tracing::info!("Fetching maintained JDK versions...");
        let versions = maintained_versions(&self.api.fetch_maintained_major_versions().await?);
        tracing::info!("Maintained JDK versions: {:?}", versions);

        let mut statistics = StatisticsCollector::new();
        let distributions = self
            .resolve_distributions(DISTRIBUTIONS, &versions, &mut statistics)
            .await;

        let document = AggregateDocument {
            last_updated: Utc::now(),
            jenv,
            jdk: JdkCatalog {
                versions,
                recommended: RECOMMENDED_VERSIONS.to_vec(),
                distributions,
            },
        };

        Ok((document, statistics.finish()))
    }

    #[tracing::instrument(skip_all)]
    async fn resolve_distributions(
        &self,
        distributions: &[Distribution],
        versions: &[u32],
        statistics: &mut StatisticsCollector,
    ) -> IndexMap<String, DistributionEntry> {
        let span = tracing::Span::current();
        span.pb_set_style(&ProgressStyle::default_bar());
        span.pb_set_length((distributions.len() * versions.len() * Platform::ALL.len()) as u64);

        let mut entries = IndexMap::new();

        for distribution in distributions {
            tracing::info!("Fetching {}...", distribution.name);

            let mut resolved_versions = IndexMap::new();
            for &version in versions {
                tracing::debug!("{} JDK {}...", distribution.id, version);

                let mut platforms = IndexMap::new();
                for platform in Platform::ALL {
                    let query = PackageQuery {
                        distribution: distribution.id,
                        version,
                        platform,
                    };

                    if let Some(record) = resolve_package(&self.api, statistics, query).await {
                        platforms.insert(platform, record);
                    }

                    span.pb_inc(1);
                    tokio::time::sleep(self.request_pacing).await;
                }

                if !platforms.is_empty() {
                    resolved_versions.insert(version, platforms);
                }
            }

            entries.insert(
                distribution.id.to_owned(),
                DistributionEntry {
                    name: distribution.name.to_owned(),
                    description: distribution.description.to_owned(),
                    recommended: distribution.recommended,
                    versions: resolved_versions,
                },
            );

            tracing::info!("{} fetched", distribution.name);
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::config_for;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount_release(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/repos/WhyWhatHow/jenv/releases/latest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tag_name": "v1.2.3",
                "assets": [{
                    "name": "jenv-linux-x86_64.tar.gz",
                    "browser_download_url": "https://example.com/jenv-linux-x86_64.tar.gz",
                    "size": 2048
                }]
            })))
            .mount(server)
            .await;
    }

    async fn mount_versions(server: &MockServer, majors: &[u32]) {
        let result: Vec<_> = majors
            .iter()
            .map(|v| json!({ "major_version": v }))
            .collect();

        Mock::given(method("GET"))
            .and(path("/disco/v3.0/major_versions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": result })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn builds_document_and_skips_missing_packages() {
        let server = MockServer::start().await;
        mount_release(&server).await;
        mount_versions(&server, &[21, 7]).await;

        Mock::given(method("GET"))
            .and(path("/disco/v3.0/packages"))
            .and(query_param("distribution", "temurin"))
            .and(query_param("operating_system", "linux"))
            .and(query_param("architecture", "x64"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "result": [{
                    "distribution": "temurin",
                    "java_version": "21.0.5+11",
                    "size": 3145728,
                    "checksum": "c0ffee",
                    "links": { "pkg_download_redirect": "https://example.com/temurin-21.tar.gz" }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        // zulu lookups fail outright, everything else comes back empty
        Mock::given(method("GET"))
            .and(path("/disco/v3.0/packages"))
            .and(query_param("distribution", "zulu"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/disco/v3.0/packages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": [] })))
            .mount(&server)
            .await;

        let processor = LinksProcessor::new(&config_for(&server)).unwrap();
        let (document, statistics) = processor.collect().await.unwrap();

        assert_eq!(document.jenv.version, "1.2.3");
        assert_eq!(document.jdk.versions, vec![21]);
        assert_eq!(document.jdk.recommended, vec![17, 21, 25]);

        let ids: Vec<_> = document.jdk.distributions.keys().cloned().collect();
        let expected: Vec<_> = DISTRIBUTIONS.iter().map(|d| d.id.to_owned()).collect();
        assert_eq!(ids, expected);

        let temurin = &document.jdk.distributions["temurin"];
        assert!(temurin.recommended);
        assert_eq!(temurin.versions.len(), 1);
        let platforms = &temurin.versions[&21u32];
        assert_eq!(platforms.len(), 1);
        assert_eq!(platforms[&Platform::LinuxX64].size, "3.0 MB");
        assert_eq!(platforms[&Platform::LinuxX64].sha256, "c0ffee");

        let corretto = &document.jdk.distributions["corretto"];
        assert!(!corretto.recommended);
        assert!(corretto.versions.is_empty());
        assert!(document.jdk.distributions["zulu"].versions.is_empty());

        let lookups = DISTRIBUTIONS.len() * Platform::ALL.len();
        assert_eq!(statistics.resolved_packages, 1);
        assert_eq!(statistics.failures.len(), Platform::ALL.len());
        assert_eq!(statistics.unavailable.len(), lookups - 1 - Platform::ALL.len());
    }

    #[tokio::test]
    async fn no_lookups_without_maintained_versions() {
        let server = MockServer::start().await;
        mount_release(&server).await;
        mount_versions(&server, &[7, 6]).await;

        Mock::given(method("GET"))
            .and(path("/disco/v3.0/packages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": [] })))
            .expect(0)
            .mount(&server)
            .await;

        let processor = LinksProcessor::new(&config_for(&server)).unwrap();
        let (document, statistics) = processor.collect().await.unwrap();

        assert!(document.jdk.versions.is_empty());
        assert_eq!(document.jdk.distributions.len(), DISTRIBUTIONS.len());
        assert_eq!(statistics.resolved_packages, 0);
    }

    #[tokio::test]
    async fn failing_version_catalog_aborts_the_run() {
        let server = MockServer::start().await;
        mount_release(&server).await;

        Mock::given(method("GET"))
            .and(path("/disco/v3.0/major_versions"))
            .respond_with(ResponseTemplate::new(503))
            .expect(3)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/disco/v3.0/packages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": [] })))
            .expect(0)
            .mount(&server)
            .await;

        let processor = LinksProcessor::new(&config_for(&server)).unwrap();

        assert!(processor.collect().await.is_err());
    }

    #[tokio::test]
    async fn failing_release_aborts_before_anything_else() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/WhyWhatHow/jenv/releases/latest"))
            .respond_with(ResponseTemplate::new(404))
            .expect(3)
            .mount(&server)
            .await;

        mount_versions(&server, &[21]).await;

        let processor = LinksProcessor::new(&config_for(&server)).unwrap();

        assert!(matches!(
            processor.collect().await,
            Err(FetcherError::HttpClientError(_))
        ));
        let requests = server.received_requests().await.unwrap();
        assert!(requests.iter().all(|r| r.url.path().starts_with("/repos/")));
    }
}
