use serde::{Deserialize, Serialize};

/// Author model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub country: String,
}

/// Book model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author_id: i64,
    pub qty: i64,
}

/// Book joined with its author, as shown in listings and searches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetails {
    pub id: i64,
    pub title: String,
    pub qty: i64,
    pub author: Author,
}

/// Partial author update; fields left as None keep their current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorChanges {
    pub name: Option<String>,
    pub country: Option<String>,
}

impl AuthorChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.country.is_none()
    }
}
