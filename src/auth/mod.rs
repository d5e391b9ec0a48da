//! Authentication and activity audit flow.

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

pub use error::AuthError;
pub use models::{Account, LoginRequest, LoginResponse, Role, SignupRequest};
pub use service::AuthService;
