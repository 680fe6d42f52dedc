use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError, require_present};

pub(crate) struct GetBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) isbn: String,
}

impl GetBookCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        require_present("isbn", req.isbn.as_str())?;
        self.catalog_service.find_book_by_isbn(req.isbn.as_str())
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref SUT_SVC: Arc<dyn CatalogService> = factory::create_catalog_service(&Configuration::new("test"));
    }

    #[tokio::test]
    async fn test_should_run_get_book() {
        let add_cmd = AddBookCommand::new(SUT_SVC.clone());
        let get_cmd = GetBookCommand::new(SUT_SVC.clone());

        let res = add_cmd.execute(AddBookCommandRequest::new("get-1", "Title 1", "Author 1", 2008, 3))
            .await.expect("should add book");
        let loaded = get_cmd.execute(GetBookCommandRequest::new(res.book.isbn.to_string())).await.expect("should get book");
        assert_eq!(res.book, loaded.book);
    }

    #[tokio::test]
    async fn test_should_fail_get_missing_book() {
        let get_cmd = GetBookCommand::new(SUT_SVC.clone());

        let res = get_cmd.execute(GetBookCommandRequest::new("get-missing".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound{ message: _ })));
        let res = get_cmd.execute(GetBookCommandRequest::new(" ".to_string())).await;
        assert!(matches!(res, Err(CommandError::Validation{ message: _, reason_code: _ })));
    }
}
