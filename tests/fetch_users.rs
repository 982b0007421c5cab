use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use octocards::github::{build_client, fetch_users, FetchError};

/// Serves the router on a loopback port and returns the /users URL.
async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}/users")
}

const TWO_USERS: &str = r#"[
  {"id": 1, "login": "octocat", "avatar_url": "https://x/a.png", "html_url": "https://x/octocat",
   "node_id": "MDQ6", "type": "User", "site_admin": false},
  {"id": 2, "login": "hubber", "avatar_url": "https://x/b.png", "html_url": "https://x/hubber"}
]"#;

#[tokio::test]
async fn decodes_users_in_received_order() {
    let router = Router::new().route(
        "/users",
        get(|| async {
            (
                [("content-type", "application/json")],
                TWO_USERS.to_string(),
            )
        }),
    );
    let url = spawn_server(router).await;

    let client = build_client().expect("client");
    let users = fetch_users(&client, &url).await.expect("fetch");

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].login, "octocat");
    assert_eq!(users[0].id, 1);
    assert_eq!(users[0].avatar_url, "https://x/a.png");
    assert_eq!(users[0].html_url, "https://x/octocat");
    assert_eq!(users[1].login, "hubber");
}

#[tokio::test]
async fn record_with_missing_display_field_still_loads_full_sequence() {
    // One incomplete record must not fail the fetch: it decodes with
    // an empty field and renders as a broken card element.
    let body = r#"[
      {"id": 1, "login": "octocat", "avatar_url": "https://x/a.png", "html_url": "https://x/octocat"},
      {"id": 2, "login": "hubber", "html_url": "https://x/hubber"}
    ]"#;
    let router = Router::new().route(
        "/users",
        get(move || async move { ([("content-type", "application/json")], body.to_string()) }),
    );
    let url = spawn_server(router).await;

    let client = build_client().expect("client");
    let users = fetch_users(&client, &url).await.expect("fetch");

    assert_eq!(users.len(), 2);
    assert_eq!(users[1].login, "hubber");
    assert_eq!(users[1].avatar_url, "");
}

#[tokio::test]
async fn empty_array_decodes_to_empty_sequence() {
    let router = Router::new().route(
        "/users",
        get(|| async { ([("content-type", "application/json")], "[]".to_string()) }),
    );
    let url = spawn_server(router).await;

    let client = build_client().expect("client");
    let users = fetch_users(&client, &url).await.expect("fetch");
    assert!(users.is_empty());
}

#[tokio::test]
async fn non_success_status_is_a_status_error() {
    let router = Router::new().route(
        "/users",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "nope") }),
    );
    let url = spawn_server(router).await;

    let client = build_client().expect("client");
    let err = fetch_users(&client, &url).await.expect_err("must fail");
    assert!(matches!(err, FetchError::Status { status: 503 }));
    assert_eq!(err.user_message(), "GitHub responded with status 503");
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let router = Router::new().route("/users", get(|| async { "<html>not json</html>" }));
    let url = spawn_server(router).await;

    let client = build_client().expect("client");
    let err = fetch_users(&client, &url).await.expect_err("must fail");
    assert!(matches!(err, FetchError::Decode { .. }));
}

#[tokio::test]
async fn unreachable_host_is_a_request_error() {
    // Port 1 on loopback: connection refused without touching the network.
    let client = build_client().expect("client");
    let err = fetch_users(&client, "http://127.0.0.1:1/users")
        .await
        .expect_err("must fail");
    assert!(matches!(err, FetchError::Request { .. }));
    assert_eq!(err.user_message(), "Could not reach GitHub");
}
