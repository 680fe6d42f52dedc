use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError, require_present};

pub(crate) struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// missing fields other than the isbn default the way an empty form would
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddBookCommandRequest {
    pub(crate) isbn: Option<String>,
    #[serde(default)]
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) author: String,
    #[serde(default)]
    pub(crate) publication_year: i32,
    #[serde(default)]
    pub(crate) available_copies: u32,
}

impl AddBookCommandRequest {
    pub fn new(isbn: &str, title: &str, author: &str, publication_year: i32, available_copies: u32) -> Self {
        Self {
            isbn: Some(isbn.to_string()),
            title: title.to_string(),
            author: author.to_string(),
            publication_year,
            available_copies,
        }
    }

    pub fn build_book(&self) -> Result<BookDto, CommandError> {
        let isbn = self.isbn.as_deref().unwrap_or_default();
        require_present("isbn", isbn)?;
        Ok(BookDto::new(isbn, self.title.as_str(), self.author.as_str(),
                        self.publication_year, self.available_copies))
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book()?;
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use lazy_static::lazy_static;
    use serde_json::json;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref SUT_SVC: Arc<dyn CatalogService> = factory::create_catalog_service(&Configuration::new("test"));
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = AddBookCommand::new(SUT_SVC.clone());

        let res = cmd.execute(AddBookCommandRequest::new("add-1", "Title 1", "Author 1", 2008, 3))
            .await.expect("should add book");
        assert_eq!("add-1", res.book.isbn.as_str());
        let loaded = SUT_SVC.find_book_by_isbn("add-1").await.expect("should return book");
        assert_eq!(3, loaded.available_copies);
    }

    #[tokio::test]
    async fn test_should_reject_missing_isbn() {
        let cmd = AddBookCommand::new(SUT_SVC.clone());

        let req: AddBookCommandRequest = serde_json::from_value(json!({"title": "Title 1"})).expect("should parse");
        let res = cmd.execute(req).await;
        assert!(matches!(res, Err(CommandError::Validation{ message: _, reason_code: _ })));
    }
}
