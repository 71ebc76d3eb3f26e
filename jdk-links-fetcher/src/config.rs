use crate::api::RetryPolicy;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const GITHUB_API_BASE: &str = "https://api.github.com/";
pub const FOOJAY_API_BASE: &str = "https://api.foojay.io/";
pub const DEFAULT_OUTPUT_PATH: &str = "data/jdk.json";

const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";
const OUTPUT_PATH_VAR: &str = "JDK_LINKS_OUTPUT";

#[derive(Clone)]
pub struct FetcherConfig {
    pub github_api_base: Url,
    pub foojay_api_base: Url,
    pub github_token: Option<String>,
    pub output_path: PathBuf,
    pub retry: RetryPolicy,

    /// Pause after every package lookup.
    pub request_pacing: Duration,
}

impl fmt::Debug for FetcherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetcherConfig")
            .field("github_api_base", &self.github_api_base.as_str())
            .field("foojay_api_base", &self.foojay_api_base.as_str())
            .field("github_token", &redacted(&self.github_token))
            .field("output_path", &self.output_path)
            .field("retry", &self.retry)
            .field("request_pacing", &self.request_pacing)
            .finish()
    }
}

/// Stand-in for a secret in debug output.
pub(crate) fn redacted(secret: &Option<String>) -> Option<&'static str> {
    secret.as_ref().map(|_| "<redacted>")
}

impl FetcherConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let github_token = lookup(GITHUB_TOKEN_VAR).filter(|v| !v.trim().is_empty());

        let output_path = lookup(OUTPUT_PATH_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

        Self {
            github_api_base: Url::parse(GITHUB_API_BASE).expect("static url is valid"),
            foojay_api_base: Url::parse(FOOJAY_API_BASE).expect("static url is valid"),
            github_token,
            output_path,
            retry: RetryPolicy::default(),
            request_pacing: Duration::from_millis(100),
        }
    }
}
