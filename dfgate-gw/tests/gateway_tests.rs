//! Gateway integration tests
//!
//! The router is driven with `oneshot`; the provider and the presigned
//! destination are both played by a wiremock server.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_json, header as header_eq, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dfgate_gw::config::{GatewayConfig, ProviderConfig};
use dfgate_gw::{build_router, AppState};

const API_KEY: &str = "test-key";
const BOUNDARY: &str = "dfgate-test-boundary";

fn test_config(base_url: &str) -> GatewayConfig {
    GatewayConfig {
        provider: ProviderConfig::new(base_url, Some(API_KEY.to_string())),
        cors_origin: "*".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        poll_interval: Duration::from_millis(10),
        max_upload_bytes: 1024 * 1024,
    }
}

fn test_app(config: &GatewayConfig) -> Router {
    let state = AppState::new(config).unwrap();
    build_router(state)
}

/// Multipart body with a single `file` part plus an unrelated text part
fn multipart_body(part_name: &str, file_name: Option<&str>, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"note\"\r\n\r\nhello\r\n"
        )
        .as_bytes(),
    );

    let disposition = match file_name {
        Some(name) => format!("form-data; name=\"{part_name}\"; filename=\"{name}\""),
        None => format!("form-data; name=\"{part_name}\""),
    };
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: {disposition}\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(query: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/upload{query}"))
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn extract_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn mount_presign(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path("/api/files/aws-presigned"))
        .and(header_eq("x-api-key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_transfer(server: &MockServer, status: u16, expected_calls: u64) {
    Mock::given(method("PUT"))
        .and(path("/bucket/object"))
        .respond_with(ResponseTemplate::new(status))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn sample_record(request_id: &str) -> Value {
    json!({
        "requestId": request_id,
        "overallStatus": "FAKE",
        "resultsSummary": { "status": "FAKE", "metadata": { "finalScore": 97.0 } },
        "models": [
            {
                "name": "rd-pine-img",
                "status": "FAKE",
                "predictionNumber": 0.97,
                "finalScore": 97.0,
                "normalizedPredictionNumber": 97.0
            },
            {
                "name": "rd-audio-model",
                "status": "AUTHENTIC",
                "predictionNumber": 0.01
            },
            {
                "name": "rd-oak-img",
                "status": "NOT_APPLICABLE"
            }
        ]
    })
}

#[tokio::test]
async fn upload_presigns_and_transfers() {
    let server = MockServer::start().await;
    let signed_url = format!("{}/bucket/object", server.uri());

    Mock::given(method("POST"))
        .and(path("/api/files/aws-presigned"))
        .and(header_eq("x-api-key", API_KEY))
        .and(body_json(json!({ "fileName": "photo.png" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "ok",
            "response": { "signedUrl": signed_url, "requestId": "req-123" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_transfer(&server, 200, 1).await;

    let app = test_app(&test_config(&server.uri()));
    let response = app
        .oneshot(upload_request("", multipart_body("file", Some("photo.png"), b"PNGDATA")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["requestId"], "req-123");
    assert_eq!(body["uploadStatus"], 200);
    assert!(body.get("analysis").is_none(), "analysis omitted when not requested");

    // The presigned destination never sees the provider credential
    let requests = server.received_requests().await.unwrap();
    let put = requests
        .iter()
        .find(|r| r.method.as_str() == "PUT")
        .unwrap();
    assert!(put.headers.get("x-api-key").is_none());
    assert_eq!(put.body, b"PNGDATA".to_vec());
}

#[tokio::test]
async fn upload_without_filename_uses_default() {
    let server = MockServer::start().await;
    let signed_url = format!("{}/bucket/object", server.uri());

    Mock::given(method("POST"))
        .and(path("/api/files/aws-presigned"))
        .and(body_json(json!({ "fileName": "upload.bin" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "signedUrl": signed_url,
            "requestId": "req-default"
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_transfer(&server, 204, 1).await;

    let app = test_app(&test_config(&server.uri()));
    let response = app
        .oneshot(upload_request("", multipart_body("file", None, b"bytes")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["requestId"], "req-default");
    assert_eq!(body["uploadStatus"], 204);
}

#[tokio::test]
async fn upload_accepts_numeric_request_id_in_nested_container() {
    let server = MockServer::start().await;
    let signed_url = format!("{}/bucket/object", server.uri());

    mount_presign(&server, json!({ "data": { "url": signed_url, "id": 42 } })).await;
    mount_transfer(&server, 201, 1).await;

    let app = test_app(&test_config(&server.uri()));
    let response = app
        .oneshot(upload_request("", multipart_body("file", Some("a.jpg"), b"x")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["requestId"], "42");
    assert_eq!(body["uploadStatus"], 201);
}

#[tokio::test]
async fn debug_mode_returns_presign_body_without_transfer() {
    let server = MockServer::start().await;
    let presign_body = json!({
        "response": {
            "signedUrl": format!("{}/bucket/object", server.uri()),
            "requestId": "req-debug"
        }
    });

    mount_presign(&server, presign_body.clone()).await;
    mount_transfer(&server, 200, 0).await;

    let app = test_app(&test_config(&server.uri()));
    let response = app
        .oneshot(upload_request("?debug=true", multipart_body("file", Some("a.jpg"), b"x")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["presign_status"], 200);
    assert_eq!(body["presign_body"], presign_body);
}

#[tokio::test]
async fn presign_redirect_is_reported_as_bad_gateway() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/files/aws-presigned"))
        .respond_with(ResponseTemplate::new(301).set_body_string("moved"))
        .mount(&server)
        .await;
    mount_transfer(&server, 200, 0).await;

    let app = test_app(&test_config(&server.uri()));
    let response = app
        .oneshot(upload_request("", multipart_body("file", Some("a.jpg"), b"x")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = extract_json(response).await;
    assert_eq!(body["error"]["code"], "UPSTREAM_STATUS");
    assert_eq!(body["error"]["upstream_status"], 301);
    assert!(body["error"]["message"].as_str().unwrap().contains("moved"));
}

#[tokio::test]
async fn presign_non_json_is_reported_as_bad_gateway() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/files/aws-presigned"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let app = test_app(&test_config(&server.uri()));
    let response = app
        .oneshot(upload_request("", multipart_body("file", Some("a.jpg"), b"x")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = extract_json(response).await;
    assert_eq!(body["error"]["code"], "UPSTREAM_PARSE");
}

#[tokio::test]
async fn missing_presign_fields_report_checked_candidates() {
    let server = MockServer::start().await;

    mount_presign(&server, json!({ "foo": "bar", "response": { "other": 1 } })).await;
    mount_transfer(&server, 200, 0).await;

    let app = test_app(&test_config(&server.uri()));
    let response = app
        .oneshot(upload_request("", multipart_body("file", Some("a.jpg"), b"x")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = extract_json(response).await;
    assert_eq!(body["error"]["code"], "FIELD_RESOLUTION");
    assert_eq!(
        body["error"]["message"],
        "Presign response missing signedUrl or requestId (checked common keys)."
    );
    let candidates = body["error"]["detail"]["checked_candidates"].as_array().unwrap();
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0]["foo"], "bar");
    assert_eq!(candidates[1]["other"], 1);
    assert_eq!(body["error"]["detail"]["full_response"]["foo"], "bar");
}

#[tokio::test]
async fn rejected_transfer_is_reported_as_bad_gateway() {
    let server = MockServer::start().await;

    mount_presign(
        &server,
        json!({ "signedUrl": format!("{}/bucket/object", server.uri()), "requestId": "r" }),
    )
    .await;
    mount_transfer(&server, 403, 1).await;

    let app = test_app(&test_config(&server.uri()));
    let response = app
        .oneshot(upload_request("", multipart_body("file", Some("a.jpg"), b"x")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = extract_json(response).await;
    assert_eq!(body["error"]["code"], "TRANSFER_FAILED");
    assert_eq!(body["error"]["upstream_status"], 403);
}

#[tokio::test]
async fn zero_fetch_timeout_skips_polling() {
    let server = MockServer::start().await;

    mount_presign(
        &server,
        json!({ "signedUrl": format!("{}/bucket/object", server.uri()), "requestId": "req-0" }),
    )
    .await;
    mount_transfer(&server, 200, 1).await;
    Mock::given(method("GET"))
        .and(path("/api/media/users/req-0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_record("req-0")))
        .expect(0)
        .mount(&server)
        .await;

    let app = test_app(&test_config(&server.uri()));
    let response = app
        .oneshot(upload_request(
            "?try_fetch_result=true&fetch_timeout=0",
            multipart_body("file", Some("a.jpg"), b"x"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["requestId"], "req-0");
    assert!(body["analysis"].is_null());
    assert!(body.get("analysis").is_some(), "analysis present as null when polled");
}

#[tokio::test]
async fn polling_returns_analysis_once_available() {
    let server = MockServer::start().await;

    mount_presign(
        &server,
        json!({ "signedUrl": format!("{}/bucket/object", server.uri()), "requestId": "req-poll" }),
    )
    .await;
    mount_transfer(&server, 200, 1).await;

    // Not ready on the first attempt
    Mock::given(method("GET"))
        .and(path("/api/media/users/req-poll"))
        .and(header_eq("x-api-key", API_KEY))
        .respond_with(ResponseTemplate::new(404))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/media/users/req-poll"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_record("req-poll")))
        .with_priority(2)
        .mount(&server)
        .await;

    let app = test_app(&test_config(&server.uri()));
    let response = app
        .oneshot(upload_request(
            "?try_fetch_result=1&fetch_timeout=5",
            multipart_body("file", Some("a.jpg"), b"x"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    // Polling hands back the raw record, not the projection
    assert_eq!(body["analysis"], sample_record("req-poll"));
}

#[tokio::test]
async fn polling_times_out_with_null_analysis() {
    let server = MockServer::start().await;

    mount_presign(
        &server,
        json!({ "signedUrl": format!("{}/bucket/object", server.uri()), "requestId": "req-slow" }),
    )
    .await;
    mount_transfer(&server, 200, 1).await;
    Mock::given(method("GET"))
        .and(path("/api/media/users/req-slow"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2..)
        .mount(&server)
        .await;

    let app = test_app(&test_config(&server.uri()));
    let response = app
        .oneshot(upload_request(
            "?try_fetch_result=true&fetch_timeout=1",
            multipart_body("file", Some("a.jpg"), b"x"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["requestId"], "req-slow");
    assert!(body.get("analysis").is_some());
    assert!(body["analysis"].is_null());
}

#[tokio::test]
async fn polled_non_json_result_is_bad_gateway() {
    let server = MockServer::start().await;

    mount_presign(
        &server,
        json!({ "signedUrl": format!("{}/bucket/object", server.uri()), "requestId": "req-bad" }),
    )
    .await;
    mount_transfer(&server, 200, 1).await;
    Mock::given(method("GET"))
        .and(path("/api/media/users/req-bad"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(&test_config(&server.uri()));
    let response = app
        .oneshot(upload_request(
            "?try_fetch_result=true&fetch_timeout=5",
            multipart_body("file", Some("a.jpg"), b"x"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = extract_json(response).await;
    assert_eq!(body["error"]["code"], "UPSTREAM_PARSE");
    assert!(body["error"]["message"].as_str().unwrap().starts_with("poll"));
}

#[tokio::test]
async fn invalid_query_flag_gets_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/files/aws-presigned"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = test_app(&test_config(&server.uri()));
    let response = app
        .oneshot(upload_request(
            "?debug=sometimes",
            multipart_body("file", Some("a.jpg"), b"x"),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = extract_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn missing_file_part_is_bad_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/files/aws-presigned"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let app = test_app(&test_config(&server.uri()));
    let response = app
        .oneshot(upload_request("", multipart_body("attachment", Some("a.jpg"), b"x")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = extract_json(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let server = MockServer::start().await;
    let mut config = test_config(&server.uri());
    config.max_upload_bytes = 64;

    let app = test_app(&config);
    let response = app
        .oneshot(upload_request("", multipart_body("file", Some("a.jpg"), &[7u8; 4096])))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn unreachable_provider_is_bad_gateway() {
    // Nothing listens on the discard port
    let app = test_app(&test_config("http://127.0.0.1:9"));
    let response = app
        .oneshot(upload_request("", multipart_body("file", Some("a.jpg"), b"x")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = extract_json(response).await;
    assert_eq!(body["error"]["code"], "UPSTREAM_UNREACHABLE");
}

#[tokio::test]
async fn result_is_projected_to_image_models() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/media/users/req-9"))
        .and(header_eq("x-api-key", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_record("req-9")))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(&test_config(&server.uri()));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/result/req-9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["requestId"], "req-9");
    assert_eq!(body["overallStatus"], "FAKE");
    assert_eq!(body["resultsSummary"]["status"], "FAKE");

    let models = body["deepfakeModels"].as_array().unwrap();
    assert_eq!(models.len(), 2);
    assert_eq!(models[0]["name"], "rd-pine-img");
    assert_eq!(models[0]["score"], 0.97);
    assert_eq!(models[0]["finalScore"], 97.0);
    assert_eq!(models[0]["normalizedScore"], 97.0);
    assert_eq!(models[1]["name"], "rd-oak-img");
    assert!(models[1]["score"].is_null());
}

#[tokio::test]
async fn result_not_found_status_is_mirrored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/media/users/unknown"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let app = test_app(&test_config(&server.uri()));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/result/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = extract_json(response).await;
    assert_eq!(body["error"]["code"], "UPSTREAM_STATUS");
    assert_eq!(body["error"]["upstream_status"], 404);
}

#[tokio::test]
async fn result_id_with_separators_stays_one_segment() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/files/aws-presigned"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "requestId": "other" })))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex("^/api/media/users/"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(&test_config(&server.uri()));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/result/..%2F..%2Ffiles%2Faws-presigned")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.path(),
        "/api/media/users/..%2F..%2Ffiles%2Faws-presigned"
    );
}

#[tokio::test]
async fn dot_segment_result_id_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_record("x")))
        .expect(0)
        .mount(&server)
        .await;

    let app = test_app(&test_config(&server.uri()));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/result/%2E%2E")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = extract_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_REQUEST_ID");
}

#[tokio::test]
async fn uploaded_request_id_resolves_on_result_endpoint() {
    let server = MockServer::start().await;

    mount_presign(
        &server,
        json!({ "result": { "uploadUrl": format!("{}/bucket/object", server.uri()), "request_id": "req-rt" } }),
    )
    .await;
    mount_transfer(&server, 200, 1).await;
    Mock::given(method("GET"))
        .and(path("/api/media/users/req-rt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_record("req-rt")))
        .expect(1)
        .mount(&server)
        .await;

    let app = test_app(&test_config(&server.uri()));

    let response = app
        .clone()
        .oneshot(upload_request("", multipart_body("file", Some("a.jpg"), b"x")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let uploaded = extract_json(response).await;
    let request_id = uploaded["requestId"].as_str().unwrap().to_string();

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/result/{request_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let result = extract_json(response).await;
    assert_eq!(result["requestId"], request_id);
}

#[tokio::test]
async fn health_answers_without_provider() {
    let app = test_app(&test_config("http://127.0.0.1:9"));
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = extract_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "dfgate-gw");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn wildcard_cors_allows_any_origin() {
    let app = test_app(&test_config("http://127.0.0.1:9"));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}

#[tokio::test]
async fn configured_origin_is_echoed_with_credentials() {
    let mut config = test_config("http://127.0.0.1:9");
    config.cors_origin = "http://localhost:3000".to_string();

    let app = test_app(&config);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}
