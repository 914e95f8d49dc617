pub mod comment;
pub mod ticket;
