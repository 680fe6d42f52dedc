use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub available_copies: u32,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, author: &str, publication_year: i32, available_copies: u32) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            publication_year,
            available_copies,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Book[ISBN: {}, Title: {}, Author: {}, Year: {}, Copies: {}]",
               self.isbn, self.title, self.author, self.publication_year, self.available_copies)
    }
}
