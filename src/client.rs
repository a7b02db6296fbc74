//! The One API client and the shared resource trait.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::{ClientConfig, SecretString};
use crate::decode::decode_into;
use crate::error::{Error, Result};
use crate::http::{build_http_client, record_path, send, ApiRequest};
use crate::model::Paginated;
use crate::options::{apply_all, RequestOption};
use crate::resources::{BooksClient, ChaptersClient, CharactersClient, MoviesClient, QuotesClient};

/// Client for `https://the-one-api.dev/v2`.
///
/// Configuration is fixed at construction; the client can be shared across
/// tasks and every call builds its own request.
#[derive(Debug, Clone)]
pub struct OneApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<SecretString>,
    persistent_options: Vec<RequestOption>,
}

impl OneApiClient {
    /// Create an authenticated client against the default base URL.
    pub fn new(api_key: impl Into<SecretString>) -> Result<Self> {
        Self::with_config(ClientConfig {
            api_key: Some(api_key.into()),
            ..Default::default()
        })
    }

    /// Create a client without an API key; only public resources are reachable.
    pub fn read_only() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client from `ONE_API_KEY` / `ONE_API_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env())
    }

    /// Create a client from a full configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = match config.http_client {
            Some(client) => client,
            None => build_http_client(config.timeout, config.proxy.as_deref())
                .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?,
        };

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.filter(|k| !k.expose_secret().is_empty()),
            persistent_options: config.persistent_options,
        })
    }

    /// The API root, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// True when an API key was configured.
    pub fn is_authenticated(&self) -> bool {
        self.api_key.is_some()
    }

    /// Options applied to every request, before per-call options.
    pub fn persistent_options(&self) -> &[RequestOption] {
        &self.persistent_options
    }

    /// Books, and the chapters of a book.
    ///
    /// # Example
    /// ```no_run
    /// use one_api_sdk::{OneApiClient, Resource};
    ///
    /// # async fn run() -> one_api_sdk::Result<()> {
    /// let client = OneApiClient::read_only()?;
    /// let books = client.books().list(&[]).await?;
    /// let chapters = client.books().chapters(&books[0].id, &[]).await?;
    /// println!("{} chapters", chapters.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn books(&self) -> BooksClient<'_> {
        BooksClient::new(self)
    }

    /// Movies, and the quotes of a movie. Requires an API key.
    pub fn movies(&self) -> MoviesClient<'_> {
        MoviesClient::new(self)
    }

    /// Characters, and the quotes of a character. Requires an API key.
    pub fn characters(&self) -> CharactersClient<'_> {
        CharactersClient::new(self)
    }

    /// All chapters across books. Requires an API key.
    pub fn chapters(&self) -> ChaptersClient<'_> {
        ChaptersClient::new(self)
    }

    /// All quotes. Requires an API key.
    pub fn quotes(&self) -> QuotesClient<'_> {
        QuotesClient::new(self)
    }

    /// Build the request for `path`.
    ///
    /// The configured API key goes first, then persistent options, then
    /// `options`, so per-call options win on set-style keys.
    pub fn build_request(&self, path: &str, options: &[RequestOption]) -> ApiRequest {
        let mut req = ApiRequest::new(&self.base_url, path);
        if let Some(key) = &self.api_key {
            RequestOption::api_key(key.expose_secret()).apply(&mut req);
        }
        apply_all(&mut req, self.persistent_options.iter().chain(options));
        req
    }

    /// Send a GET for `path` and decode the body into `T`.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        options: &[RequestOption],
    ) -> Result<T> {
        let request = self.build_request(path, options);
        let response = send(&self.http, &request).await?;
        decode_into(path, &response)
    }
}

/// A listable resource reached at `PATH`, e.g. `/book`.
///
/// Implementors only name the path and record type; the list and lookup
/// calls are shared.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Record type returned by this resource.
    type Entity: DeserializeOwned + Send;

    /// Collection path, e.g. `/book`.
    const PATH: &'static str;

    /// The client requests are sent through.
    fn client(&self) -> &OneApiClient;

    /// List records in server order.
    async fn list(&self, options: &[RequestOption]) -> Result<Vec<Self::Entity>> {
        Ok(self.list_paginated(options).await?.into_docs())
    }

    /// List records together with the pagination metadata.
    async fn list_paginated(&self, options: &[RequestOption]) -> Result<Paginated<Self::Entity>> {
        self.client().fetch(Self::PATH, options).await
    }

    /// Fetch a single record by id.
    ///
    /// Fails with [`Error::NotFound`] when the server answers with no
    /// documents, or without a request when `id` is empty.
    async fn get(&self, id: &str, options: &[RequestOption]) -> Result<Self::Entity> {
        let path = record_path(Self::PATH, id, None)?;
        let page: Paginated<Self::Entity> = self.client().fetch(&path, options).await?;
        page.docs
            .into_iter()
            .next()
            .ok_or(Error::NotFound { endpoint: path })
    }
}
