#[cfg(test)]
mod tests {
    use crate::helpers::make_test_app;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use serde_json::json;
    use tower::ServiceExt;

    fn post_tickets(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/tickets")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_ticket_success() {
        let (app, _app_state) = make_test_app().await;

        let response = app
            .oneshot(post_tickets(json!({
                "title": "T",
                "description": "D",
                "priority": 3
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let location = response
            .headers()
            .get(header::LOCATION)
            .expect("Location header")
            .to_str()
            .unwrap()
            .to_owned();

        let json = body_json(response).await;
        assert_eq!(json["title"], "T");
        assert_eq!(json["description"], "D");
        assert_eq!(json["status"], 1);
        assert_eq!(json["priority"], 3);
        assert_eq!(json["createdAt"], json["updatedAt"]);
        assert_eq!(location, format!("/api/tickets/{}", json["id"]));
    }

    #[tokio::test]
    async fn create_ticket_defaults_priority_to_medium() {
        let (app, _app_state) = make_test_app().await;

        let response = app
            .oneshot(post_tickets(json!({
                "title": "No priority given",
                "description": "D"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["status"], 1);
        assert_eq!(json["priority"], 2);
    }

    #[tokio::test]
    async fn create_ticket_empty_title_returns_400_with_title_error() {
        let (app, app_state) = make_test_app().await;

        let response = app
            .oneshot(post_tickets(json!({
                "title": "",
                "description": "d",
                "priority": 3
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        let errors = json["errors"].as_array().unwrap();
        assert!(errors.iter().any(|e| e["field"] == "title"));

        // Validation short-circuits: nothing was persisted.
        let (_, total) = db::models::ticket::Model::list_paginated(app_state.db(), 1, 10)
            .await
            .unwrap();
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn create_ticket_title_too_long_returns_400() {
        let (app, _app_state) = make_test_app().await;

        let response = app
            .oneshot(post_tickets(json!({
                "title": "x".repeat(201),
                "description": "d"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        let errors = json["errors"].as_array().unwrap();
        assert!(errors.iter().any(|e| e["field"] == "title"));
    }

    #[tokio::test]
    async fn create_ticket_unknown_priority_returns_400() {
        let (app, _app_state) = make_test_app().await;

        let response = app
            .oneshot(post_tickets(json!({
                "title": "T",
                "description": "D",
                "priority": 9
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        let errors = json["errors"].as_array().unwrap();
        assert!(errors.iter().any(|e| e["field"] == "priority"));
    }

    #[tokio::test]
    async fn create_ticket_missing_fields_collects_all_errors() {
        let (app, _app_state) = make_test_app().await;

        let response = app.oneshot(post_tickets(json!({}))).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        let errors = json["errors"].as_array().unwrap();
        assert!(errors.iter().any(|e| e["field"] == "title"));
        assert!(errors.iter().any(|e| e["field"] == "description"));
    }
}
