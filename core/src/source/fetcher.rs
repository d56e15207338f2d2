use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::error::FetchError;
use crate::model::VocabularyFile;

/// Where the word list comes from.
pub trait WordFetcher {
    fn fetch(&self) -> impl Future<Output = Result<VocabularyFile, FetchError>>;
}

impl<F: WordFetcher + ?Sized> WordFetcher for &F {
    fn fetch(&self) -> impl Future<Output = Result<VocabularyFile, FetchError>> {
        (**self).fetch()
    }
}

/// Fetches the JSON word list over HTTP(S). No conditional requests; every call hits the network.
#[derive(Clone)]
pub struct HttpWordFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpWordFetcher {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl WordFetcher for HttpWordFetcher {
    async fn fetch(&self) -> Result<VocabularyFile, FetchError> {
        debug!(url = %self.url, "fetching word list");
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus { status });
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
