//! Integration tests for the session history API endpoint

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::test_utils::{body_to_string, test_app};

    /// Tests looking up a session that was never used returns 404
    #[tokio::test]
    async fn it_returns_404_for_unknown_sessions() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/history/never-used-session")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("\"success\":false"));
        assert!(body.contains("Session not found"));
    }
}
