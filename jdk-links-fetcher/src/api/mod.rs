mod models;
mod retry;
pub use models::*;
pub use retry::RetryPolicy;

use crate::config::{FetcherConfig, redacted};
use crate::error::FetcherError;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::redirect::Policy;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::fmt;
use url::Url;

const JENV_REPOSITORY: [&str; 2] = ["WhyWhatHow", "jenv"];

/// Access to the release API of the jenv repository and the foojay disco API.
#[derive(Clone)]
pub struct CatalogApi {
    client: Client,
    github_base: Url,
    foojay_base: Url,
    github_token: Option<String>,
    retry: RetryPolicy,
}

impl fmt::Debug for CatalogApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogApi")
            .field("github_base", &self.github_base.as_str())
            .field("foojay_base", &self.foojay_base.as_str())
            .field("github_token", &redacted(&self.github_token))
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl CatalogApi {
    /// Prepare the API client.
    pub fn new(config: &FetcherConfig) -> Result<Self, FetcherError> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .redirect(Policy::limited(10))
            .hickory_dns(true)
            .build()?;

        Ok(Self {
            client,
            github_base: config.github_api_base.clone(),
            foojay_base: config.foojay_api_base.clone(),
            github_token: config.github_token.clone(),
            retry: config.retry,
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn fetch_latest_release(&self) -> Result<GithubRelease, FetcherError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        if let Some(token) = &self.github_token {
            tracing::info!("Found GITHUB_TOKEN, using it for authentication.");

            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let [owner, repo] = JENV_REPOSITORY;
        let url = Self::path(
            &self.github_base,
            ["repos", owner, repo, "releases", "latest"],
        )?;

        self.fetch_json_with_retry(url, headers).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn fetch_maintained_major_versions(
        &self,
    ) -> Result<MajorVersionsResponse, FetcherError> {
        let mut url = Self::path(&self.foojay_base, ["disco", "v3.0", "major_versions"])?;
        url.query_pairs_mut().append_pair("maintained", "true");

        self.fetch_json_with_retry(url, HeaderMap::new()).await
    }

    /// Look up the newest GA package for one query.
    ///
    /// Not retried. `Ok(None)` means the catalog has nothing for the query.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_package(
        &self,
        query: &PackageQuery<'_>,
    ) -> Result<Option<DiscoPackage>, FetcherError> {
        let url = Self::path(&self.foojay_base, ["disco", "v3.0", "packages"])?;
        let version = query.version.to_string();

        let response = self
            .client
            .get(url)
            .query(&[
                ("version", version.as_str()),
                ("distribution", query.distribution),
                ("operating_system", query.platform.foojay_os()),
                ("architecture", query.platform.foojay_arch()),
                ("archive_type", query.platform.archive_type()),
                ("package_type", "jdk"),
                ("latest", "available"),
                ("release_status", "ga"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let data = response.bytes().await?;
        let packages: PackagesResponse = serde_json::from_slice(&data)?;

        Ok(packages.result.into_iter().flatten().next())
    }

    async fn fetch_json_with_retry<T: DeserializeOwned>(
        &self,
        url: Url,
        headers: HeaderMap,
    ) -> Result<T, FetcherError> {
        self.retry
            .run(url.as_str(), || {
                let request = self.client.get(url.clone()).headers(headers.clone());

                async move {
                    let response = request.send().await?.error_for_status()?;
                    let data = response.bytes().await?;

                    serde_json::from_slice(&data).map_err(FetcherError::from)
                }
            })
            .await
    }

    fn path(
        base: &Url,
        segments: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Url, FetcherError> {
        let mut new_path = base.clone();
        new_path
            .path_segments_mut()
            .map_err(|_| FetcherError::InvalidBaseUrl(base.clone()))?
            .pop_if_empty()
            .extend(segments);

        Ok(new_path)
    }
}
