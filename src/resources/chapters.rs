//! `/chapter`

use async_trait::async_trait;

use crate::client::{OneApiClient, Resource};
use crate::model::Chapter;

#[derive(Debug, Clone, Copy)]
pub struct ChaptersClient<'a> {
    client: &'a OneApiClient,
}

impl<'a> ChaptersClient<'a> {
    pub(crate) fn new(client: &'a OneApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<'a> Resource for ChaptersClient<'a> {
    type Entity = Chapter;
    const PATH: &'static str = "/chapter";

    fn client(&self) -> &OneApiClient {
        self.client
    }
}
