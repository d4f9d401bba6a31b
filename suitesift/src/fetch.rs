use std::path::Path;
use std::time::Duration;

use once_cell::sync::OnceCell;
use reqwest::Url;

use suitesift_core::error::SuitesiftError;

/// Reads the text behind a revision endpoint.
pub trait RevisionFetcher {
    fn fetch(&self, source_url: &str) -> Result<String, SuitesiftError>;
}

/// Fetches `http(s)://` endpoints over the network and `file://` URLs or bare
/// paths from disk.
///
/// The HTTP client is built on the first `http(s)` fetch, so runs that never
/// touch the network never construct one.
#[derive(Debug, Clone, Default)]
pub struct UrlRevisionFetcher {
    http_client: OnceCell<reqwest::blocking::Client>,
}

impl UrlRevisionFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn http_client(
        &self,
        source_url: &str,
    ) -> Result<&reqwest::blocking::Client, SuitesiftError> {
        self.http_client.get_or_try_init(|| {
            reqwest::blocking::Client::builder()
                .connect_timeout(Duration::from_secs(15))
                .timeout(Duration::from_secs(60))
                .build()
                .map_err(|error| SuitesiftError::Fetch {
                    source_url: source_url.to_string(),
                    message: error.to_string(),
                })
        })
    }

    #[cfg(test)]
    pub(crate) fn has_http_client(&self) -> bool {
        self.http_client.get().is_some()
    }

    fn fetch_http(&self, url: Url, source_url: &str) -> Result<String, SuitesiftError> {
        let fetch_error = |error: reqwest::Error| SuitesiftError::Fetch {
            source_url: source_url.to_string(),
            message: error.to_string(),
        };
        self.http_client(source_url)?
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(fetch_error)?
            .text()
            .map_err(fetch_error)
    }
}

impl RevisionFetcher for UrlRevisionFetcher {
    fn fetch(&self, source_url: &str) -> Result<String, SuitesiftError> {
        match Url::parse(source_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => self.fetch_http(url, source_url),
            Ok(url) if url.scheme() == "file" => {
                let path = url.to_file_path().map_err(|_| SuitesiftError::Fetch {
                    source_url: source_url.to_string(),
                    message: "not a local file path".to_string(),
                })?;
                read_local(&path)
            }
            Ok(url) => Err(SuitesiftError::Fetch {
                source_url: source_url.to_string(),
                message: format!("unsupported scheme `{}`", url.scheme()),
            }),
            // Anything that is not a URL is treated as a local path.
            Err(_) => read_local(Path::new(source_url)),
        }
    }
}

fn read_local(path: &Path) -> Result<String, SuitesiftError> {
    std::fs::read_to_string(path).map_err(|source| SuitesiftError::Io {
        path: path.to_path_buf(),
        source,
    })
}
