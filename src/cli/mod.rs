pub mod database;
pub mod user;
