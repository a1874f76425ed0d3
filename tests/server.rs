//! Handler and routing tests with the YouTube API mocked out.

use axum::Form;
use axum::body::to_bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use yt_web::database;
use yt_web::handlers::{embed, home, search};
use yt_web::server::{AppState, router};
use yt_web::views::Views;
use yt_web::youtube::YouTubeConfig;

fn app_state(server: &MockServer) -> (TempDir, AppState) {
    let dir = tempfile::tempdir().unwrap();
    let conn = database::open(&dir.path().join("comments.db")).unwrap();
    let youtube = YouTubeConfig::new("test-key").with_base_url(server.uri());
    (dir, AppState::new(youtube, Views::new().unwrap(), conn))
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn mock_results(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "id": { "videoId": "aaa" } },
                { "id": { "videoId": "bbb" } }
            ]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "id": "aaa",
                    "snippet": { "title": "Ferris explains lifetimes", "channelTitle": "Crab TV" },
                    "contentDetails": { "duration": "PT2M5S" }
                },
                {
                    "id": "bbb",
                    "snippet": { "title": "Borrow checker marathon", "channelTitle": "Crab TV" },
                    "contentDetails": { "duration": "PT1H2M3S" }
                }
            ]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn home_renders_search_form() {
    let server = MockServer::start().await;
    let (_dir, state) = app_state(&server);

    let response = home::run(State(state)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(r#"name="query""#));
}

#[tokio::test]
async fn search_renders_results_in_order() {
    let server = MockServer::start().await;
    mock_results(&server).await;
    let (_dir, state) = app_state(&server);

    let form = search::SearchForm {
        query: "rust".to_string(),
    };
    let response = search::run(State(state), Ok(Form(form))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    let first = html.find("Ferris explains lifetimes").unwrap();
    let second = html.find("Borrow checker marathon").unwrap();
    assert!(first < second);
    assert!(html.contains("2:05"));
    assert!(html.contains("1:02:03"));
    assert!(html.contains(r#"href="/embed/aaa""#));
}

#[tokio::test]
async fn search_without_results_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let (_dir, state) = app_state(&server);
    let form = search::SearchForm {
        query: "zzzz".to_string(),
    };
    let response = search::run(State(state), Ok(Form(form))).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "No videos found.");
}

#[tokio::test]
async fn search_api_failure_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (_dir, state) = app_state(&server);
    let form = search::SearchForm {
        query: "rust".to_string(),
    };
    let response = search::run(State(state), Ok(Form(form))).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "No videos found.");
}

#[tokio::test]
async fn embed_renders_player_url() {
    let server = MockServer::start().await;
    let (_dir, state) = app_state(&server);

    let response = embed::run(State(state), Path("abc123".to_string())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(&tera::escape_html(
        "https://www.youtube.com/embed/abc123"
    )));
}

#[tokio::test]
async fn routes_serve_over_http() {
    let server = MockServer::start().await;
    mock_results(&server).await;
    let (_dir, state) = app_state(&server);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });

    let client = reqwest::Client::new();
    let base = format!("http://{}", addr);

    let home = client.get(format!("{base}/")).send().await.unwrap();
    assert_eq!(home.status(), reqwest::StatusCode::OK);

    let results = client
        .post(format!("{base}/search"))
        .form(&[("query", "rust")])
        .send()
        .await
        .unwrap();
    assert_eq!(results.status(), reqwest::StatusCode::OK);
    assert!(results.text().await.unwrap().contains("Crab TV"));

    let embed = client
        .get(format!("{base}/embed/abc123"))
        .send()
        .await
        .unwrap();
    assert_eq!(embed.status(), reqwest::StatusCode::OK);

    let missing = client.get(format!("{base}/nope")).send().await.unwrap();
    assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_without_form_body_uses_empty_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let (_dir, state) = app_state(&server);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });

    let client = reqwest::Client::new();
    let url = format!("http://{}/search", addr);

    let bare = client.post(&url).send().await.unwrap();
    assert_eq!(bare.status(), reqwest::StatusCode::NOT_FOUND);
    assert_eq!(bare.text().await.unwrap(), "No videos found.");

    let plain = client
        .post(&url)
        .header("content-type", "text/plain")
        .body("query=rust")
        .send()
        .await
        .unwrap();
    assert_eq!(plain.status(), reqwest::StatusCode::NOT_FOUND);
    assert_eq!(plain.text().await.unwrap(), "No videos found.");
}
