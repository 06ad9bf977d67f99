use std::time::Duration;

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handler::{AppModule, BookStore};

pub use self::{book::*, table::*};

mod book;
mod table;

pub fn routes<D: BookStore>() -> Router<AppModule<D>> {
    Router::<AppModule<D>>::new().route_book().route_table()
}

/// Wraps every route with the transport middleware: panic recovery (500),
/// a per-request deadline (408), access logging and CORS.
pub fn layered<S>(router: Router<S>, timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new())
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use driver::database::InMemoryDatabase;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::handler::AppModule;
    use crate::route::{layered, routes};

    fn app() -> Router {
        routes().with_state(AppModule::new(InMemoryDatabase::new()))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .expect("failed to build request");

        let response = app
            .clone()
            .oneshot(request)
            .await
            .expect("router request failed");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn book_lifecycle() {
        let app = app();

        let (status, body) = send(
            &app,
            "POST",
            "/books",
            Some(r#"{"id":"1","title":"T","author":"A","quantity":5}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"id":"1","title":"T","author":"A","quantity":5}));

        let (status, body) = send(&app, "GET", "/books/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id":"1","title":"T","author":"A","quantity":5}));

        let (status, body) = send(
            &app,
            "PUT",
            "/books/1",
            Some(r#"{"title":"T2","author":"A","quantity":9}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id":"1","title":"T2","author":"A","quantity":9}));

        let (status, body) = send(&app, "DELETE", "/books/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message":"book deleted"}));

        let (status, body) = send(&app, "GET", "/books/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message":"book not found"}));
    }

    #[tokio::test]
    async fn list_books() {
        let app = app();

        let (status, body) = send(&app, "GET", "/books", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        for id in ["a", "b"] {
            let payload = json!({"id": id, "title": "T", "author": "A", "quantity": 1});
            let (status, _) = send(&app, "POST", "/books", Some(&payload.to_string())).await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = send(&app, "GET", "/books", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                {"id":"a","title":"T","author":"A","quantity":1},
                {"id":"b","title":"T","author":"A","quantity":1}
            ])
        );
    }

    #[tokio::test]
    async fn missing_book() {
        let app = app();

        let (status, _) = send(&app, "GET", "/books/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, "DELETE", "/books/999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            "PUT",
            "/books/999",
            Some(r#"{"title":"T","author":"A","quantity":1}"#),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_body_leaves_store_untouched() {
        let app = app();

        let (status, body) = send(&app, "POST", "/books", Some("not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message":"bad request"}));

        let (status, body) = send(&app, "GET", "/books", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn typed_body_is_enforced() {
        let app = app();

        let rejected = [
            r#"{"id":1,"title":"T","author":"A","quantity":5}"#,
            r#"{"id":"1","title":"T","author":"A","quantity":"5"}"#,
            r#"{"id":"1","title":"T","author":"A"}"#,
            r#"{"id":"1","title":"T","author":"A","quantity":5,"isbn":"x"}"#,
        ];
        for body in rejected {
            let (status, _) = send(&app, "POST", "/books", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
        }

        let request = Request::builder()
            .method("POST")
            .uri("/books")
            .body(Body::from(
                r#"{"id":"1","title":"T","author":"A","quantity":5}"#,
            ))
            .expect("failed to build request");
        let response = app
            .clone()
            .oneshot(request)
            .await
            .expect("router request failed");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let (status, body) = send(&app, "GET", "/books", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn update_ignores_body_id() {
        let app = app();
        send(
            &app,
            "POST",
            "/books",
            Some(r#"{"id":"1","title":"T","author":"A","quantity":5}"#),
        )
        .await;

        let (status, body) = send(
            &app,
            "PUT",
            "/books/1",
            Some(r#"{"id":"other","title":"T","author":"B","quantity":-1}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id":"1","title":"T","author":"B","quantity":-1}));

        let (status, _) = send(&app, "GET", "/books/other", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, "PUT", "/books/1", Some(r#"{"title":"T"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn duplicate_create_is_internal_error() {
        let app = app();
        let payload = r#"{"id":"1","title":"T","author":"A","quantity":5}"#;

        let (status, _) = send(&app, "POST", "/books", Some(payload)).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(&app, "POST", "/books", Some(payload)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"message":"internal error"}));
    }

    #[tokio::test]
    async fn list_tables() {
        let app = app();

        let (status, body) = send(&app, "GET", "/tables", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["books"]));
    }

    async fn slow() -> StatusCode {
        tokio::time::sleep(Duration::from_millis(500)).await;
        StatusCode::OK
    }

    async fn panicking() -> StatusCode {
        panic!("handler panicked")
    }

    fn layered_app() -> Router {
        let router = routes()
            .route("/slow", get(slow))
            .route("/panic", get(panicking));
        layered(router, Duration::from_millis(10)).with_state(AppModule::new(InMemoryDatabase::new()))
    }

    #[tokio::test]
    async fn request_past_deadline_times_out() {
        let app = layered_app();

        let (status, _) = send(&app, "GET", "/slow", None).await;
        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);

        let (status, body) = send(&app, "GET", "/books", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn panicking_handler_is_internal_error() {
        let app = layered_app();

        let (status, _) = send(&app, "GET", "/panic", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, body) = send(&app, "GET", "/tables", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["books"]));
    }
}
