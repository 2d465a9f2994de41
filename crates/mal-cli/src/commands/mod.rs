pub mod chat;
pub mod draw;
