pub mod authorize;
pub mod discovery;
pub mod error;
pub mod health;
pub mod jwks;
pub mod token;
pub mod userinfo;

pub use error::AppError;
