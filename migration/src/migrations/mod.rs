pub mod m20260825000001_create_tickets;
pub mod m20260825000002_create_comments;
