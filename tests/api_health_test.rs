//! Integration tests for the health API endpoint

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::test_utils::{body_to_string, test_app};

    /// Tests the health check always succeeds and reports the default
    /// provider and the supported set
    #[tokio::test]
    async fn it_reports_ok_with_provider_info() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("\"status\":\"ok\""));
        assert!(body.contains("\"provider\":\"xai\""));
        assert!(body.contains("\"supportedProviders\":[\"xai\",\"zai\"]"));
    }
}
