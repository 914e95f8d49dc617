#[cfg(test)]
mod tests {
    use crate::helpers::make_test_app;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use db::models::comment::Model as CommentModel;
    use db::models::ticket::{Model as TicketModel, TicketPriority};
    use serde_json::json;
    use tower::ServiceExt;

    fn post_comment(ticket_id: i64, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/api/tickets/{ticket_id}/comments"))
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
    async fn create_comment_success() {
        let (app, app_state) = make_test_app().await;

        let ticket = TicketModel::create(app_state.db(), "Ticket", "desc", TicketPriority::Medium)
            .await
            .unwrap();

        let response = app
            .oneshot(post_comment(ticket.id, json!({ "content": "Looking into it" })))
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
        assert_eq!(location, format!("/api/tickets/{}/comments", ticket.id));

        let json = body_json(response).await;
        assert_eq!(json["ticketId"], ticket.id);
        assert_eq!(json["content"], "Looking into it");
        assert!(json["id"].as_i64().unwrap() > 0);
        assert!(json["createdAt"].is_string());
    }

    #[tokio::test]
    async fn create_comment_missing_ticket_returns_404_and_persists_nothing() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();

        let ticket = TicketModel::create(db, "Real", "desc", TicketPriority::Medium)
            .await
            .unwrap();

        let response = app
            .oneshot(post_comment(ticket.id + 1, json!({ "content": "orphan" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        use sea_orm::EntityTrait;
        let all = db::models::comment::Entity::find().all(db).await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn create_comment_empty_content_returns_400() {
        let (app, app_state) = make_test_app().await;

        let ticket = TicketModel::create(app_state.db(), "Ticket", "desc", TicketPriority::Medium)
            .await
            .unwrap();

        let response = app
            .oneshot(post_comment(ticket.id, json!({ "content": "" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        let errors = json["errors"].as_array().unwrap();
        assert!(errors.iter().any(|e| e["field"] == "content"));

        let comments = CommentModel::find_all_for_ticket(app_state.db(), ticket.id)
            .await
            .unwrap();
        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn create_comment_content_too_long_returns_400() {
        let (app, app_state) = make_test_app().await;

        let ticket = TicketModel::create(app_state.db(), "Ticket", "desc", TicketPriority::Medium)
            .await
            .unwrap();

        let response = app
            .oneshot(post_comment(ticket.id, json!({ "content": "x".repeat(1001) })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
