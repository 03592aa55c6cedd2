pub mod auth;

pub use auth::{ActivatedUser, AuthenticatedUser};
