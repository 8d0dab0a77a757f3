use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode, header};
use slim::domain::config::AppConfig;
use slim::domain::kinds::ContentKinds;
use slim_server::Server;
use slim_server::showcase::render_index;
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

const APP_JS: &str = include_str!("../../../public/app.js");

fn build_app(config: AppConfig) -> (Router, TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("app.js"), APP_JS).expect("write app.js");

    let server = Server::builder()
        .config(config)
        .static_dir(dir.path())
        .build()
        .expect("server");
    (server.router(), dir)
}

async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
        .await
        .expect("infallible")
}

async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8")
}

fn header_len(response: &Response<Body>) -> Option<usize> {
    response.headers().get(header::CONTENT_LENGTH)?.to_str().ok()?.parse().ok()
}

#[tokio::test]
async fn index_is_minified() {
    let config = AppConfig::default();
    let raw = render_index(&config.showcase);
    let (app, _dir) = build_app(config);

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html; charset=utf-8");

    let length = header_len(&response);
    let body = body_string(response).await;
    assert!(body.len() < raw.len());
    assert_eq!(length, Some(body.len()));
    assert!(!body.contains("Page header"));
    assert!(body.contains("12,500"));
    assert!(body.contains("Refresh Data"));
}

#[tokio::test]
async fn packages_follow_json_setting() {
    let (app, _dir) = build_app(AppConfig::default());
    let pretty = body_string(get(&app, "/api/packages").await).await;
    assert!(pretty.contains('\n'));

    let records: serde_json::Value = serde_json::from_str(&pretty).expect("json");
    assert_eq!(records.as_array().map(Vec::len), Some(4));
    assert_eq!(records[0]["downloads"], 12_500);
    assert_eq!(records[2]["name"], "JS Compressor");

    let mut config = AppConfig::default();
    config.minify.set_kinds(ContentKinds::JSON, true);
    let (app, _dir) = build_app(config);
    let compact = body_string(get(&app, "/api/packages").await).await;
    assert!(!compact.contains('\n'));
    assert_eq!(serde_json::from_str::<serde_json::Value>(&compact).expect("json"), records);
}

#[tokio::test]
async fn config_endpoint_uses_client_names() {
    let (app, _dir) = build_app(AppConfig::default());
    let response = get(&app, "/api/config").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value =
        serde_json::from_str(&body_string(response).await).expect("json");
    assert_eq!(json["apiEndpoint"], "https://api.example.com/data");
    assert_eq!(json["maxRetries"], 3);
    assert_eq!(json["timeout"], 5000);
    assert_eq!(json["features"]["darkMode"], true);
    assert_eq!(json["features"]["analytics"], false);
}

#[tokio::test]
async fn static_script_is_minified() {
    let (app, _dir) = build_app(AppConfig::default());

    let response = get(&app, "/static/app.js").await;
    assert_eq!(response.status(), StatusCode::OK);

    let length = header_len(&response);
    let body = body_string(response).await;
    assert!(body.len() < APP_JS.len());
    assert_eq!(length, Some(body.len()));
    assert!(!body.contains("Showcase page script"));
    assert!(body.contains("formatNumber"));
}

#[tokio::test]
async fn static_script_untouched_when_js_disabled() {
    let mut config = AppConfig::default();
    config.minify.js = false;
    let (app, _dir) = build_app(config);

    let body = body_string(get(&app, "/static/app.js").await).await;
    assert_eq!(body, APP_JS);
}

#[tokio::test]
async fn ranged_asset_is_served_verbatim() {
    let (app, _dir) = build_app(AppConfig::default());

    let request = Request::get("/static/app.js")
        .header(header::RANGE, "bytes=0-39")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("infallible");

    assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
    assert_eq!(
        response.headers()[header::CONTENT_RANGE],
        format!("bytes 0-39/{}", APP_JS.len()).as_str()
    );
    assert_eq!(header_len(&response), Some(40));
    assert_eq!(body_string(response).await, &APP_JS[..40]);
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let (app, _dir) = build_app(AppConfig::default());
    let response = get(&app, "/static/missing.js").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_is_served() {
    let (app, _dir) = build_app(AppConfig::default());
    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value =
        serde_json::from_str(&body_string(response).await).expect("json");
    assert_eq!(json["status"], "up");
}

#[test]
fn missing_certificate_fails_build() {
    let mut config = AppConfig::default();
    config.server.ssl = Some(slim::domain::config::SslConfig {
        cert: "does/not/exist.pem".into(),
        key: "does/not/exist.key".into(),
    });

    let err = Server::builder().config(config).build().unwrap_err();
    assert!(err.to_string().contains("TLS certificate not found"));
}
