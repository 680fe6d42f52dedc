use std::net::SocketAddr;
use lambda_http::{run, Error};
use tracing::info;
use lms_catalog::catalog::controller::routes;
use lms_catalog::catalog::factory::create_catalog_service;
use lms_catalog::core::controller::AppState;
use lms_catalog::core::domain::{Configuration, Runtime};
use lms_catalog::utils::logging::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env();
    // one catalog per process, shared by every request handler
    let catalog = create_catalog_service(&config);
    let state = AppState::new(config.clone(), catalog);

    match config.runtime {
        Runtime::Lambda => {
            info!(branch = %config.branch_id, "starting catalog on lambda runtime");
            run(routes::<lambda_http::Body>(state)).await
        }
        Runtime::Http => {
            let addr: SocketAddr = config.bind_addr.parse()?;
            info!(branch = %config.branch_id, %addr, "starting catalog");
            axum::Server::bind(&addr)
                .serve(routes::<axum::body::Body>(state).into_make_service())
                .await?;
            Ok(())
        }
    }
}
