//! Book record model and request payload types.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::validation::{self, Violation};

/// A persisted book record. The id is assigned by the store at creation
/// and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub isbn: String,
}

/// A validated book that has not been persisted yet (no id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub isbn: String,
}

impl BookDraft {
    /// Attach an id, producing the full record. Used on update, where the
    /// id of the loaded record is kept and all mutable fields are replaced.
    pub fn with_id(self, id: i32) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            publication_year: self.publication_year,
            isbn: self.isbn,
        }
    }
}

/// Raw create/update request body. All fields optional so that missing
/// keys surface as validation errors rather than deserialization failures.
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publication_year: Option<i32>,
    pub isbn: Option<String>,
}

impl TryFrom<BookPayload> for BookDraft {
    type Error = Vec<Violation>;

    fn try_from(payload: BookPayload) -> Result<Self, Self::Error> {
        let violations = validation::validate(&payload);
        match (
            violations.is_empty(),
            payload.title,
            payload.author,
            payload.publication_year,
            payload.isbn,
        ) {
            (true, Some(title), Some(author), Some(publication_year), Some(isbn)) => Ok(BookDraft {
                title,
                author,
                publication_year,
                isbn,
            }),
            _ => Err(violations),
        }
    }
}
