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

    #[tokio::test]
    async fn delete_ticket_cascades_to_comments() {
        let (app, app_state) = make_test_app().await;
        let db = app_state.db();

        let ticket = TicketModel::create(db, "To delete", "desc", TicketPriority::Medium)
            .await
            .unwrap();
        CommentModel::create(db, ticket.id, "first").await.unwrap();
        CommentModel::create(db, ticket.id, "second").await.unwrap();

        let req = Request::builder()
            .method("DELETE")
            .uri(format!("/api/tickets/{}", ticket.id))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        // The ticket is gone, so its comment list now 404s rather than
        // returning an empty array.
        let req = Request::builder()
            .method("GET")
            .uri(format!("/api/tickets/{}/comments", ticket.id))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        assert!(!TicketModel::exists(db, ticket.id).await.unwrap());
        assert!(
            CommentModel::find_all_for_ticket(db, ticket.id)
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn delete_missing_ticket_returns_404() {
        let (app, _app_state) = make_test_app().await;

        let req = Request::builder()
            .method("DELETE")
            .uri("/api/tickets/999")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
