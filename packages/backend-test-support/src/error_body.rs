//! Assertions for the backend's uniform error body.
//!
//! Every failure the API reports, whether a rejected move, a malformed query
//! or an unknown game, carries the same JSON shape. These helpers check it
//! without depending on backend types.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of the backend's error body.
#[derive(Debug, Deserialize)]
pub struct ErrorBodyLike {
    pub error: bool,
    pub code: String,
    pub message: String,
    pub status: u16,
    pub trace_id: String,
}

/// Check status, code, trace id parity and (optionally) a message fragment.
///
/// Returns the parsed body so callers can make further assertions.
pub fn assert_error_body_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_message_contains: Option<&str>,
) -> ErrorBodyLike {
    assert_eq!(status, expected_status);

    let parsed: ErrorBodyLike =
        serde_json::from_slice(body).expect("response body should be an error body");

    assert!(parsed.error, "error flag must be set on failures");
    assert_eq!(parsed.code, expected_code);
    assert_eq!(parsed.status, expected_status.as_u16());

    let request_id = headers
        .get("x-request-id")
        .expect("x-request-id header should be present")
        .to_str()
        .expect("x-request-id header should be valid UTF-8");
    assert_eq!(
        parsed.trace_id, request_id,
        "trace_id in body should match x-request-id header"
    );

    if let Some(fragment) = expected_message_contains {
        assert!(
            parsed.message.contains(fragment),
            "expected message to contain '{}', got '{}'",
            fragment,
            parsed.message
        );
    }

    parsed
}

/// Same as [`assert_error_body_from_parts`], consuming a test service response.
pub async fn assert_error_body(
    resp: ServiceResponse<BoxBody>,
    expected_code: &str,
    expected_status: StatusCode,
    expected_message_contains: Option<&str>,
) -> ErrorBodyLike {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_error_body_from_parts(
        status,
        &headers,
        &body,
        expected_code,
        expected_status,
        expected_message_contains,
    )
}
