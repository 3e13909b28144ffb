use serde::{Deserialize, Serialize};

/// Identity used when a record has neither an id nor a title.
pub const FALLBACK_IDENTITY: &str = "book";

/// A book as stored by the library. Read-only input to a layout pass.
///
/// Field names follow the library's camelCase JSON export so a saved library
/// can be loaded without conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_pages: Option<u32>,
    /// Open Library work key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<String>,
}

impl BookRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_pages(mut self, pages: u32) -> Self {
        self.number_of_pages = Some(pages);
        self
    }

    /// String the hash is taken from: id, then title, then a fixed fallback.
    pub fn identity(&self) -> &str {
        [self.id.as_str(), self.title.as_str()]
            .into_iter()
            .find(|candidate| !candidate.is_empty())
            .unwrap_or(FALLBACK_IDENTITY)
    }

    /// Page count, zero when unknown.
    pub fn pages(&self) -> u32 {
        self.number_of_pages.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_falls_back_in_order() {
        assert_eq!(BookRecord::new("b1", "Dune").identity(), "b1");
        assert_eq!(BookRecord::new("", "Dune").identity(), "Dune");
        assert_eq!(BookRecord::default().identity(), FALLBACK_IDENTITY);
    }

    #[test]
    fn parses_library_export() {
        let json = r#"{
            "id": "3f1c",
            "title": "Dune",
            "authors": ["Frank Herbert"],
            "isbn": "9780441013593",
            "coverUrl": "https://covers.openlibrary.org/b/id/1-M.jpg",
            "publishYear": 1965,
            "numberOfPages": 412,
            "key": "/works/OL893415W",
            "subjects": ["Science fiction"],
            "addedAt": "2024-05-01T10:00:00.000Z"
        }"#;
        let book: BookRecord = serde_json::from_str(json).unwrap();
        assert_eq!(book.pages(), 412);
        assert_eq!(book.publish_year, Some(1965));
        assert_eq!(book.authors, vec!["Frank Herbert".to_string()]);
    }

    #[test]
    fn missing_optionals_default() {
        let book: BookRecord = serde_json::from_str(r#"{"id": "x", "title": "T"}"#).unwrap();
        assert_eq!(book.pages(), 0);
        assert!(book.cover_url.is_none());
        assert!(book.authors.is_empty());
    }
}
