#![allow(dead_code)]

// tests/common/mod.rs
use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use mancala_backend::middleware::{RequestTrace, StructuredLogger};
use mancala_backend::{routes, AppState};
use serde_json::Value;

pub mod proptest_prelude;

// Logging is auto-installed for every test binary that includes this module.
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Initialize the production routes and middleware over `state`.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}

/// GET `uri` and return status plus parsed JSON body.
pub async fn get_json<S>(app: &S, uri: &str) -> (u16, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status().as_u16();
    let body = test::read_body(resp).await;
    let json: Value = serde_json::from_slice(&body)
        .unwrap_or_else(|_| panic!("expected JSON body from {uri}, got {body:?}"));
    (status, json)
}

/// Start a default game and return its id.
pub async fn start_game<S>(app: &S) -> String
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let (status, body) = get_json(app, "/start").await;
    assert_eq!(status, 200);
    body["id"].as_str().expect("game id").to_string()
}
