use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use trustsec_client::{
    ClientConfig, ClientError, Credentials, DeviceApiClient, HttpTransport, ResponseExt,
    TransportError,
};

#[derive(Clone, Default)]
struct Upstream {
    hits: Arc<AtomicUsize>,
}

async fn echo(
    State(upstream): State<Upstream>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    upstream.hits.fetch_add(1, Ordering::SeqCst);
    Json(json!({ "status": 1, "data": [], "query": query }))
}

async fn rejected() -> Json<Value> {
    Json(json!({ "status": 0, "msg": "tid does not belong to this account" }))
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded")
}

async fn html() -> &'static str {
    "<html>maintenance</html>"
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(2)).await;
    Json(json!({ "status": 1 }))
}

async fn spawn_upstream() -> (SocketAddr, Upstream) {
    let upstream = Upstream::default();
    let app = Router::new()
        .route("/mobile/terminal_lists", get(echo))
        .route("/mobile/locreport_add", get(echo))
        .route("/mobile/terminal_key_set", get(echo))
        .route("/mobile/terminal_edit", get(rejected))
        .route("/mobile/terminal_info", get(broken))
        .route("/mobile/terminal_key", get(html))
        .route("/mobile/terminal_active", get(slow))
        .with_state(upstream.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service())
            .await
            .expect("serve");
    });
    (addr, upstream)
}

fn client_for(addr: SocketAddr) -> DeviceApiClient {
    DeviceApiClient::new("school-admin", "p@ss word&more")
        .expect("client")
        .with_endpoint(format!("http://{addr}/mobile/"))
        .expect("endpoint")
}

#[tokio::test]
async fn query_parameters_reach_the_server_encoded() {
    let (addr, upstream) = spawn_upstream().await;
    let client = client_for(addr);

    let body = client.list_devices().await.expect("list devices");

    assert_eq!(body["status"], 1);
    assert_eq!(body["data"], json!([]));
    assert_eq!(
        body["query"],
        json!({ "uid": "school-admin", "pwd": "p@ss word&more" })
    );
    assert_eq!(upstream.hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn fixed_interval_and_joined_numbers_arrive_as_sent() {
    let (addr, _) = spawn_upstream().await;
    let client = client_for(addr);

    let body = client
        .add_location_report_window(77, "06:30", "07:10", "12345")
        .await
        .unwrap();
    assert_eq!(body["query"]["itime"], "15");
    assert_eq!(body["query"]["tid"], "77");

    let body = client
        .set_emergency_contacts(77, &["13800000001".to_string()], "120")
        .await
        .unwrap();
    assert_eq!(body["query"]["keynum"], "13800000001");
    assert_eq!(body["query"]["keysos"], "120");
}

#[tokio::test]
async fn application_errors_pass_through_until_checked() {
    let (addr, _) = spawn_upstream().await;
    let client = client_for(addr);

    let body = client.update_device(5, "renamed").await.expect("raw body");
    assert_eq!(body.upstream_status(), Some(0));

    let err = body.ensure_status(1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "upstream reported status 0: tid does not belong to this account"
    );
}

#[tokio::test]
async fn server_errors_surface_as_transport_errors() {
    let (addr, _) = spawn_upstream().await;
    let client = client_for(addr);

    let err = client.device_detail(5).await.unwrap_err();
    match err {
        ClientError::Transport(TransportError::Http(error)) => {
            assert_eq!(error.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
            assert!(error.url().is_none());
        }
        other => panic!("expected http transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn html_body_is_a_decode_error() {
    let (addr, _) = spawn_upstream().await;
    let client = client_for(addr);

    let err = client.emergency_contacts(5).await.unwrap_err();
    assert!(err.is_decode(), "{err:?}");
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(addr).list_devices().await.unwrap_err();
    assert!(err.is_transport(), "{err:?}");
}

#[tokio::test]
async fn configured_timeout_is_applied_by_the_http_client() {
    let (addr, _) = spawn_upstream().await;
    let config = ClientConfig {
        endpoint: format!("http://{addr}/mobile"),
        login_name: "school-admin".to_string(),
        password: "secret".to_string(),
        timeout_ms: Some(200),
    };
    let client = DeviceApiClient::from_config(&config).expect("client");

    let err = client.activate_device(1).await.unwrap_err();
    match err {
        ClientError::Transport(TransportError::Http(error)) => assert!(error.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn prebuilt_reqwest_client_can_be_injected() {
    let (addr, upstream) = spawn_upstream().await;
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("reqwest client");
    let credentials = Credentials::new("school-admin", "secret").unwrap();
    let client =
        DeviceApiClient::with_transport(credentials, Arc::new(HttpTransport::from_client(http)))
            .with_endpoint(format!("http://{addr}/mobile"))
            .expect("endpoint");

    let body = client.list_devices().await.expect("list devices");

    assert_eq!(body["query"]["uid"], "school-admin");
    assert_eq!(upstream.hits.load(Ordering::SeqCst), 1);
}
