//! Resource records and the paginated envelope they arrive in.
//!
//! Records are decoded leniently: missing fields fall back to empty or zero,
//! and unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// Paginated list envelope, e.g. `{"docs":[...],"total":3,"limit":1000,...}`.
///
/// `docs` keeps the server's order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Paginated<T> {
    #[serde(default = "Vec::new", alias = "Docs")]
    pub docs: Vec<T>,

    #[serde(default, alias = "Total")]
    pub total: u64,

    #[serde(default, alias = "Limit")]
    pub limit: u64,

    #[serde(default, alias = "Offset")]
    pub offset: u64,

    #[serde(default, alias = "Page")]
    pub page: u64,

    #[serde(default, alias = "Pages")]
    pub pages: u64,
}

impl<T> Paginated<T> {
    /// Consume the envelope, keeping only the records.
    pub fn into_docs(self) -> Vec<T> {
        self.docs
    }
}

/// A book of the trilogy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(alias = "Name")]
    pub name: String,
}

/// A film.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(alias = "Name")]
    pub name: String,

    #[serde(rename = "runtimeInMinutes")]
    pub runtime_minutes: u32,

    #[serde(rename = "budgetInMillions")]
    pub budget_millions: f64,

    #[serde(rename = "boxOfficeRevenueInMillions")]
    pub box_office_revenue_millions: f64,

    pub academy_award_nominations: u32,

    pub academy_award_wins: u32,

    pub rotten_tomatoes_score: f64,
}

/// A chapter; `book_id` refers to a [`Book`] but is not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chapter {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "chapterName", alias = "name", alias = "Name")]
    pub name: String,

    #[serde(rename = "book")]
    pub book_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Character {
    #[serde(rename = "_id")]
    pub id: String,
    pub birth: String,
    pub death: String,
    pub gender: String,
    pub height: String,
    pub realm: String,
    pub spouse: String,
    #[serde(alias = "Name")]
    pub name: String,
    pub race: String,
    pub wiki_url: String,
}

/// A line of dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(alias = "Dialog")]
    pub dialog: String,

    #[serde(rename = "character", alias = "Character")]
    pub character_id: String,

    #[serde(rename = "movie", alias = "Movie")]
    pub movie_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_envelope_with_capitalized_keys() {
        let page: Paginated<Book> =
            serde_json::from_str(r#"{"Docs":[{"_id":"123","Name":"Sample Book"}]}"#).unwrap();
        assert_eq!(
            page.docs,
            vec![Book {
                id: "123".to_string(),
                name: "Sample Book".to_string()
            }]
        );
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_pagination_metadata() {
        let page: Paginated<Book> = serde_json::from_str(
            r#"{"docs":[],"total":3,"limit":1000,"offset":0,"page":1,"pages":1}"#,
        )
        .unwrap();
        assert!(page.docs.is_empty());
        assert_eq!((page.total, page.limit, page.page, page.pages), (3, 1000, 1, 1));
    }

    #[test]
    fn test_missing_docs_defaults_to_empty() {
        let page: Paginated<Quote> = serde_json::from_str(r#"{"total":0}"#).unwrap();
        assert!(page.into_docs().is_empty());
    }

    #[test]
    fn test_movie_fields() {
        let movie: Movie = serde_json::from_str(
            r#"{
                "_id": "5cd95395de30eff6ebccde5c",
                "name": "The Fellowship of the Ring",
                "runtimeInMinutes": 178,
                "budgetInMillions": 93,
                "boxOfficeRevenueInMillions": 871.5,
                "academyAwardNominations": 13,
                "academyAwardWins": 4,
                "rottenTomatoesScore": 91
            }"#,
        )
        .unwrap();
        assert_eq!(movie.runtime_minutes, 178);
        assert_eq!(movie.budget_millions, 93.0);
        assert_eq!(movie.box_office_revenue_millions, 871.5);
        assert_eq!(movie.academy_award_nominations, 13);
        assert_eq!(movie.academy_award_wins, 4);
        assert_eq!(movie.rotten_tomatoes_score, 91.0);
    }

    #[test]
    fn test_chapter_fields() {
        let chapter: Chapter = serde_json::from_str(
            r#"{"_id":"c1","chapterName":"A Long-expected Party","book":"b1"}"#,
        )
        .unwrap();
        assert_eq!(chapter.name, "A Long-expected Party");
        assert_eq!(chapter.book_id, "b1");
    }

    #[test]
    fn test_character_partial_record() {
        let character: Character = serde_json::from_str(
            r#"{"_id":"ch1","name":"Frodo Baggins","race":"Hobbit","wikiUrl":"http://x"}"#,
        )
        .unwrap();
        assert_eq!(character.name, "Frodo Baggins");
        assert_eq!(character.wiki_url, "http://x");
        assert_eq!(character.spouse, "");
    }

    #[test]
    fn test_quote_fields() {
        let quote: Quote = serde_json::from_str(
            r#"{"_id":"q1","dialog":"Deagol!","movie":"m1","character":"ch1","id":"q1"}"#,
        )
        .unwrap();
        assert_eq!(quote.dialog, "Deagol!");
        assert_eq!(quote.character_id, "ch1");
        assert_eq!(quote.movie_id, "m1");
    }
}
