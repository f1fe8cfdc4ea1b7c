pub mod jwt;
pub mod password;
pub(crate) mod repository;
mod root;
mod types;

pub use jwt::TokenConfig;
pub use root::*;
pub use types::*;
