//! `/movie`

use async_trait::async_trait;

use crate::client::{OneApiClient, Resource};
use crate::error::Result;
use crate::model::{Movie, Quote};
use crate::options::RequestOption;

/// Films, including box office and award figures.
#[derive(Debug, Clone, Copy)]
pub struct MoviesClient<'a> {
    client: &'a OneApiClient,
}

impl<'a> MoviesClient<'a> {
    pub(crate) fn new(client: &'a OneApiClient) -> Self {
        Self { client }
    }

    /// List the quotes spoken in a movie.
    ///
    /// Only the trilogy films have quotes; for the others this fails with
    /// [`Error::NoQuotes`](crate::Error::NoQuotes).
    pub async fn quotes(&self, movie_id: &str, options: &[RequestOption]) -> Result<Vec<Quote>> {
        super::quotes_for(self.client, Self::PATH, movie_id, options).await
    }
}

#[async_trait]
impl<'a> Resource for MoviesClient<'a> {
    type Entity = Movie;
    const PATH: &'static str = "/movie";

    fn client(&self) -> &OneApiClient {
        self.client
    }
}
