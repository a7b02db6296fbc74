//! `/character`

use async_trait::async_trait;

use crate::client::{OneApiClient, Resource};
use crate::error::Result;
use crate::model::{Character, Quote};
use crate::options::RequestOption;

#[derive(Debug, Clone, Copy)]
pub struct CharactersClient<'a> {
    client: &'a OneApiClient,
}

impl<'a> CharactersClient<'a> {
    pub(crate) fn new(client: &'a OneApiClient) -> Self {
        Self { client }
    }

    /// List the quotes of a character; fails with
    /// [`Error::NoQuotes`](crate::Error::NoQuotes) if there are none.
    pub async fn quotes(&self, character_id: &str, options: &[RequestOption]) -> Result<Vec<Quote>> {
        super::quotes_for(self.client, Self::PATH, character_id, options).await
    }
}

#[async_trait]
impl<'a> Resource for CharactersClient<'a> {
    type Entity = Character;
    const PATH: &'static str = "/character";

    fn client(&self) -> &OneApiClient {
        self.client
    }
}
