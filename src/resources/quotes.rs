//! `/quote`

use async_trait::async_trait;

use crate::client::{OneApiClient, Resource};
use crate::model::Quote;

#[derive(Debug, Clone, Copy)]
pub struct QuotesClient<'a> {
    client: &'a OneApiClient,
}

impl<'a> QuotesClient<'a> {
    pub(crate) fn new(client: &'a OneApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<'a> Resource for QuotesClient<'a> {
    type Entity = Quote;
    const PATH: &'static str = "/quote";

    fn client(&self) -> &OneApiClient {
        self.client
    }
}
