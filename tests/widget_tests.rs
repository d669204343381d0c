// tests/widget_tests.rs

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;

use commentbox::error::ServiceError;
use commentbox::models::comment::{Comment, CreateCommentRequest};
use commentbox::{CommentService, CommentWidget, HttpCommentService, Phase};

/// In-process stand-in for the remote comment service, keeping its state
/// in memory. `GET /comments/p500` always answers 500 so the uniform
/// failure path can be exercised.
#[derive(Clone)]
struct StubState {
    comments: Arc<Mutex<Vec<Comment>>>,
    next_id: Arc<AtomicI64>,
}

async fn list_comments(
    State(state): State<StubState>,
    Path(post_id): Path<String>,
) -> impl IntoResponse {
    if post_id == "p500" {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let comments = state.comments.lock().unwrap();
    let scoped: Vec<Comment> = comments
        .iter()
        .filter(|c| c.post_id == post_id)
        .cloned()
        .collect();
    Json(scoped).into_response()
}

async fn create_comment(
    State(state): State<StubState>,
    Json(payload): Json<CreateCommentRequest>,
) -> impl IntoResponse {
    if payload.post_id == "p500" {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let comment = Comment {
        id: state.next_id.fetch_add(1, Ordering::SeqCst),
        post_id: payload.post_id,
        author: payload.author,
        content: payload.content,
        date: Utc::now(),
        likes: 0,
    };
    state.comments.lock().unwrap().insert(0, comment.clone());
    (StatusCode::CREATED, Json(comment)).into_response()
}

async fn like_comment(
    State(state): State<StubState>,
    Path(comment_id): Path<i64>,
) -> impl IntoResponse {
    let mut comments = state.comments.lock().unwrap();
    match comments.iter_mut().find(|c| c.id == comment_id) {
        Some(comment) => {
            comment.likes += 1;
            Json(serde_json::json!({ "likes": comment.likes })).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Helper function to spawn the stub service on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
async fn spawn_stub(seed: Vec<Comment>) -> String {
    let next_id = seed.iter().map(|c| c.id).max().unwrap_or(0) + 1;
    let state = StubState {
        comments: Arc::new(Mutex::new(seed)),
        next_id: Arc::new(AtomicI64::new(next_id)),
    };

    let app = Router::new()
        .route("/comments/{post_id}", get(list_comments))
        .route("/comments", post(create_comment))
        .route("/comments/{comment_id}/like", post(like_comment))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

fn http_service(address: &str) -> HttpCommentService {
    let base_url = address.parse().expect("stub address must be a valid URL");
    HttpCommentService::new(base_url, Duration::from_secs(5))
}

fn seed_comment(id: i64, post_id: &str, author: &str) -> Comment {
    Comment {
        id,
        post_id: post_id.to_string(),
        author: author.to_string(),
        content: "Hi".to_string(),
        date: "2024-01-01T00:00:00Z".parse().unwrap(),
        likes: 0,
    }
}

#[tokio::test]
async fn fetch_returns_comments_scoped_to_post() {
    // Arrange
    let address = spawn_stub(vec![
        seed_comment(2, "p2", "Cy"),
        seed_comment(1, "p1", "Ann"),
    ])
    .await;
    let service = http_service(&address);

    // Act
    let comments = service.fetch_comments("p1").await.expect("fetch failed");

    // Assert
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].id, 1);
    assert_eq!(comments[0].author, "Ann");
}

#[tokio::test]
async fn create_gets_server_assigned_id_and_date() {
    // Arrange
    let address = spawn_stub(vec![seed_comment(1, "p1", "Ann")]).await;
    let service = http_service(&address);

    // Act
    let created = service
        .create_comment(&CreateCommentRequest {
            post_id: "p1".to_string(),
            author: "Bo".to_string(),
            content: "Nice post".to_string(),
        })
        .await
        .expect("create failed");

    // Assert: the server picked the id, the client never did
    assert_eq!(created.id, 2);
    assert_eq!(created.likes, 0);
    let comments = service.fetch_comments("p1").await.unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].id, 2);
}

#[tokio::test]
async fn each_like_call_issues_one_increment() {
    // Arrange
    let address = spawn_stub(vec![seed_comment(1, "p1", "Ann")]).await;
    let service = http_service(&address);

    // Act
    let first = service.like_comment(1).await.expect("like failed");
    let second = service.like_comment(1).await.expect("like failed");

    // Assert
    assert_eq!(first.likes, 1);
    assert_eq!(second.likes, 2);
}

#[tokio::test]
async fn non_success_status_is_a_uniform_failure() {
    // Arrange
    let address = spawn_stub(vec![]).await;
    let service = http_service(&address);

    // Act
    let fetch = service.fetch_comments("p500").await;
    let like = service.like_comment(999).await;

    // Assert
    assert!(matches!(fetch, Err(ServiceError::Status(500))));
    assert!(matches!(like, Err(ServiceError::Status(404))));
}

#[tokio::test]
async fn unreachable_service_is_a_transport_failure() {
    // Arrange: grab a free port, then close it again
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());
    drop(listener);
    let service = http_service(&address);

    // Act
    let result = service.fetch_comments("p1").await;

    // Assert
    assert!(matches!(result, Err(ServiceError::Transport(_))));
}

#[tokio::test]
async fn widget_full_flow_over_http() {
    // Arrange
    let address = spawn_stub(vec![seed_comment(1, "p1", "Ann")]).await;

    // Act: mount, submit a comment, like the older one
    let mut widget = CommentWidget::mount(http_service(&address), "p1").await;
    assert_eq!(widget.phase(), Phase::Ready);
    assert_eq!(widget.comments().len(), 1);

    widget.set_draft_author("Bo");
    widget.set_draft_content("Nice post");
    widget.submit().await;
    widget.like(1).await;

    // Assert: newest first, only the liked comment changed
    let ids: Vec<i64> = widget.comments().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert_eq!(widget.comments()[0].likes, 0);
    assert_eq!(widget.comments()[1].likes, 1);
    assert_eq!(widget.draft_author(), "");
    assert_eq!(widget.draft_content(), "");
}

#[tokio::test]
async fn widget_survives_failing_service() {
    // Arrange: mount against the always-500 post
    let address = spawn_stub(vec![]).await;
    let mut widget = CommentWidget::mount(http_service(&address), "p500").await;

    // Assert: settled with an empty list, still interactive
    assert!(!widget.is_loading());
    assert!(widget.comments().is_empty());

    // Act: a failed submit keeps the drafts
    widget.set_draft_author("Bo");
    widget.set_draft_content("Nice post");
    widget.submit().await;

    assert!(widget.comments().is_empty());
    assert_eq!(widget.draft_author(), "Bo");
    assert_eq!(widget.draft_content(), "Nice post");
    assert!(!widget.is_submitting());
}
