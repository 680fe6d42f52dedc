use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError, require_present};

pub(crate) struct ReturnBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ReturnBookCommand {
    pub(crate) fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnBookCommandRequest {
    pub(crate) isbn: String,
}

impl ReturnBookCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}


#[derive(Debug, Serialize)]
pub(crate) struct ReturnBookCommandResponse {
    pub returned: bool,
}

impl ReturnBookCommandResponse {
    pub fn new(returned: bool) -> Self {
        Self {
            returned,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        require_present("isbn", req.isbn.as_str())?;
        self.catalog_service.return_book(req.isbn.as_str())
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use lazy_static::lazy_static;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
    use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    lazy_static! {
        static ref SUT_SVC: Arc<dyn CatalogService> = factory::create_catalog_service(&Configuration::new("test"));
    }

    #[tokio::test]
    async fn test_should_run_borrow_and_return_book() {
        let add_cmd = AddBookCommand::new(SUT_SVC.clone());
        let borrow_cmd = BorrowBookCommand::new(SUT_SVC.clone());
        let return_cmd = ReturnBookCommand::new(SUT_SVC.clone());

        let _ = add_cmd.execute(AddBookCommandRequest::new("return-1", "Title 1", "Author 1", 2008, 2))
            .await.expect("should add book");
        let _ = borrow_cmd.execute(BorrowBookCommandRequest::new("return-1".to_string()))
            .await.expect("should borrow book");
        let res = return_cmd.execute(ReturnBookCommandRequest::new("return-1".to_string()))
            .await.expect("should return book");
        assert!(res.returned);
        let loaded = SUT_SVC.find_book_by_isbn("return-1").await.expect("should return book");
        assert_eq!(2, loaded.available_copies);
    }

    #[tokio::test]
    async fn test_should_fail_return_of_missing_book() {
        let return_cmd = ReturnBookCommand::new(SUT_SVC.clone());

        let res = return_cmd.execute(ReturnBookCommandRequest::new("return-missing".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound{ message: _ })));
    }
}
