#[cfg(test)]
mod tests {
    use crate::helpers::make_test_app;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use db::models::comment::Model as CommentModel;
    use db::models::ticket::{Model as TicketModel, TicketPriority};
    use tower::ServiceExt;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn list_comments_oldest_first() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();

        let ticket = TicketModel::create(db, "Ticket", "desc", TicketPriority::Medium)
            .await
            .unwrap();
        let first = CommentModel::create(db, ticket.id, "first").await.unwrap();
        let second = CommentModel::create(db, ticket.id, "second").await.unwrap();

        let req = Request::builder()
            .method("GET")
            .uri(format!("/api/tickets/{}/comments", ticket.id))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let comments = json.as_array().unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0]["id"], first.id);
        assert_eq!(comments[0]["ticketId"], ticket.id);
        assert_eq!(comments[0]["content"], "first");
        assert!(comments[0]["createdAt"].is_string());
        assert_eq!(comments[1]["id"], second.id);
    }

    #[tokio::test]
    async fn list_comments_empty_ticket_returns_empty_array() {
        let (app, app_state) = make_test_app().await;

        let ticket = TicketModel::create(app_state.db(), "Ticket", "desc", TicketPriority::Medium)
            .await
            .unwrap();

        let req = Request::builder()
            .method("GET")
            .uri(format!("/api/tickets/{}/comments", ticket.id))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_comments_missing_ticket_returns_404() {
        let (app, _app_state) = make_test_app().await;

        let req = Request::builder()
            .method("GET")
            .uri("/api/tickets/999/comments")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["title"], "Ticket not found");
    }
}
