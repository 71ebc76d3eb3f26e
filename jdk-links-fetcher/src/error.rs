use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum FetcherError {
    #[error("an I/O error occurred: {0}")]
    GenericIo(#[from] std::io::Error),

    #[error("http client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("deserialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("base url can not carry path segments: {0}")]
    InvalidBaseUrl(Url),
}
