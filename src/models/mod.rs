pub mod book;
pub mod category;
pub mod user;
