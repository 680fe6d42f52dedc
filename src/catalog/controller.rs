use axum::{
    BoxError,
    body::HttpBody,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
use crate::catalog::command::find_books_by_author_cmd::{FindBooksByAuthorCommand, FindBooksByAuthorCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::domain::CatalogStats;
use crate::core::command::Command;
use crate::core::controller::{ApiResponse, AppState, json_to_server_error, lending_error, ServerError, ServerResponse};

#[derive(Debug, Deserialize)]
pub(crate) struct IsbnParams {
    isbn: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuthorParams {
    author: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    status: String,
    version: String,
    branch: String,
    catalog: CatalogStats,
}

pub fn routes<B>(state: AppState) -> Router<(), B>
    where B: HttpBody + Send + 'static, B::Data: Send, B::Error: Into<BoxError> {
    let library = Router::new()
        .route("/book/add", post(add_book))
        .route("/book/remove", delete(remove_book))
        .route("/findBookByIsbn", get(find_book_by_isbn))
        .route("/findBooksByAuthor", get(find_books_by_author))
        .route("/borrowBook", post(borrow_book))
        .route("/returnBook", post(return_book));
    Router::new()
        .nest("/api/library", library)
        .route("/health", get(health_check))
        .with_state(state)
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<ServerResponse, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let _ = AddBookCommand::new(state.catalog).execute(req).await?;
    Ok(ApiResponse::with_message(StatusCode::CREATED, "Book added successfully"))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Query(params): Query<IsbnParams>) -> Result<ServerResponse, ServerError> {
    let req = RemoveBookCommandRequest::new(params.isbn.unwrap_or_default());
    let res = RemoveBookCommand::new(state.catalog).execute(req).await?;
    Ok(ApiResponse::with_message(StatusCode::NO_CONTENT,
                                 format!("Book: {} removed successfully", res.isbn).as_str()))
}

pub(crate) async fn find_book_by_isbn(
    State(state): State<AppState>,
    Query(params): Query<IsbnParams>) -> Result<ServerResponse, ServerError> {
    let req = GetBookCommandRequest::new(params.isbn.unwrap_or_default());
    let res = GetBookCommand::new(state.catalog).execute(req).await?;
    ApiResponse::with_data(StatusCode::OK, &res.book)
}

pub(crate) async fn find_books_by_author(
    State(state): State<AppState>,
    Query(params): Query<AuthorParams>) -> Result<ServerResponse, ServerError> {
    let req = FindBooksByAuthorCommandRequest::new(params.author.unwrap_or_default());
    let res = FindBooksByAuthorCommand::new(state.catalog).execute(req).await?;
    ApiResponse::with_data(StatusCode::OK, &res.books)
}

pub(crate) async fn borrow_book(
    State(state): State<AppState>,
    Query(params): Query<IsbnParams>) -> Result<ServerResponse, ServerError> {
    let req = BorrowBookCommandRequest::new(params.isbn.unwrap_or_default());
    let _ = BorrowBookCommand::new(state.catalog).execute(req).await.map_err(lending_error)?;
    Ok(ApiResponse::with_message(StatusCode::OK, "Book borrowed!"))
}

pub(crate) async fn return_book(
    State(state): State<AppState>,
    Query(params): Query<IsbnParams>) -> Result<ServerResponse, ServerError> {
    let req = ReturnBookCommandRequest::new(params.isbn.unwrap_or_default());
    let _ = ReturnBookCommand::new(state.catalog).execute(req).await.map_err(lending_error)?;
    Ok(ApiResponse::with_message(StatusCode::OK, "Book returned!"))
}

pub(crate) async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        branch: state.config.branch_id.to_string(),
        catalog: state.catalog.stats().await,
    })
}
