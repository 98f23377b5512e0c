pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::form::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.upload_body_limit();

    Router::new()
        .route("/health", get(health::health_handler))
        // Form session
        .route("/api/v1/form", get(handlers::handle_get_form))
        .route("/api/v1/form/commands", post(handlers::handle_command))
        .route(
            "/api/v1/form/picture",
            post(handlers::handle_upload_picture).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/v1/form/picture/status",
            get(handlers::handle_picture_status),
        )
        // Preview
        .route("/api/v1/preview", get(handlers::handle_preview))
        .route("/api/v1/theme/toggle", post(handlers::handle_toggle_theme))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::form::PictureStatus;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const BOUNDARY: &str = "cvgen-test-boundary";

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn command(body: Value) -> Request<Body> {
        Request::post("/api/v1/form/commands")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn upload(file_name: &str, content_type: &str, data: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"picture\"; filename=\"{file_name}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::post("/api/v1/form/picture")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(AppState::new(Config::default()));
        let (status, body) = send(app, Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_commands_update_state_and_preview() {
        let state = AppState::new(Config::default());

        for body in [
            json!({"type": "set_field", "field": "name", "value": "Ada"}),
            json!({"type": "set_field", "field": "email", "value": "a@x.com"}),
            json!({"type": "add_entry", "collection": "education"}),
        ] {
            let (status, _) = send(build_router(state.clone()), command(body)).await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = send(
            build_router(state.clone()),
            command(json!({
                "type": "set_entry_field",
                "collection": "education",
                "index": 1,
                "field": "school",
                "value": "MIT"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"]["education"][0]["school"], "");
        assert_eq!(body["state"]["education"][1]["school"], "MIT");
        assert_eq!(body["preview"]["contact"]["name"], "Ada");
        assert_eq!(body["preview"]["contact"]["email"], "a@x.com");
        assert_eq!(body["preview"]["education"].as_array().unwrap().len(), 2);
        assert!(body["preview"].get("skills").is_none());
    }

    #[tokio::test]
    async fn test_bad_commands_rejected_without_change() {
        let state = AppState::new(Config::default());

        let (status, body) = send(
            build_router(state.clone()),
            command(json!({"type": "set_field", "field": "nickname", "value": "x"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INVALID_COMMAND");

        let (status, _) = send(
            build_router(state.clone()),
            command(json!({"type": "set_skill", "index": 1, "value": "Go"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        assert_eq!(state.form.snapshot(), crate::resume::ResumeState::new());
    }

    #[tokio::test]
    async fn test_picture_upload_is_ingested() {
        let state = AppState::new(Config::default());

        let (status, body) =
            send(build_router(state.clone()), upload("me.png", "image/png", b"hello")).await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body["generation"], 1);
        assert_eq!(body["status"]["state"], "pending");

        let mut updates = state.form.subscribe();
        updates
            .wait_for(|session| matches!(session.picture_status, PictureStatus::Ready { .. }))
            .await
            .unwrap();

        let (_, preview) = send(
            build_router(state.clone()),
            Request::get("/api/v1/preview").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(
            preview["preview"]["picture"]["src"],
            "data:image/png;base64,aGVsbG8="
        );
    }

    #[tokio::test]
    async fn test_empty_upload_is_noop() {
        let state = AppState::new(Config::default());
        let (status, _) = send(build_router(state.clone()), upload("", "application/octet-stream", b"")).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(state.form.picture_status(), PictureStatus::Idle);
    }

    #[tokio::test]
    async fn test_non_image_upload_rejected() {
        let app = build_router(AppState::new(Config::default()));
        let (status, body) = send(app, upload("cv.pdf", "application/pdf", b"%PDF-1.7")).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["code"], "PICTURE_UNSUPPORTED_TYPE");
    }

    #[tokio::test]
    async fn test_oversized_upload_rejected() {
        let config = Config {
            max_picture_bytes: 10,
            ..Config::default()
        };
        let state = AppState::new(config);

        let (status, body) =
            send(build_router(state.clone()), upload("big.png", "image/png", &[0u8; 11])).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "PICTURE_TOO_LARGE");
        assert!(state.form.snapshot().picture.is_none());
    }

    #[tokio::test]
    async fn test_theme_toggle() {
        let state = AppState::new(Config::default());
        let toggle = || Request::post("/api/v1/theme/toggle").body(Body::empty()).unwrap();

        let (_, body) = send(build_router(state.clone()), toggle()).await;
        assert_eq!(body["dark_mode"], true);

        let (_, body) = send(
            build_router(state.clone()),
            Request::get("/api/v1/preview").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(body["dark_mode"], true);
    }
}
