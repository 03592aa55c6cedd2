pub mod auth;
pub mod email;
pub mod movie;
