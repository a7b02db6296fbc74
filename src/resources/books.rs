//! `/book`

use async_trait::async_trait;

use crate::client::{OneApiClient, Resource};
use crate::error::Result;
use crate::http::record_path;
use crate::model::{Book, Chapter, Paginated};
use crate::options::RequestOption;

/// Books of the trilogy. Public; no API key needed.
#[derive(Debug, Clone, Copy)]
pub struct BooksClient<'a> {
    client: &'a OneApiClient,
}

impl<'a> BooksClient<'a> {
    pub(crate) fn new(client: &'a OneApiClient) -> Self {
        Self { client }
    }

    /// List the chapters of a book.
    ///
    /// An empty `book_id` fails with [`Error::NotFound`](crate::Error::NotFound)
    /// rather than listing every chapter.
    pub async fn chapters(&self, book_id: &str, options: &[RequestOption]) -> Result<Vec<Chapter>> {
        let path = record_path(Self::PATH, book_id, Some("chapter"))?;
        let page: Paginated<Chapter> = self.client.fetch(&path, options).await?;
        Ok(page.into_docs())
    }
}

#[async_trait]
impl<'a> Resource for BooksClient<'a> {
    type Entity = Book;
    const PATH: &'static str = "/book";

    fn client(&self) -> &OneApiClient {
        self.client
    }
}
