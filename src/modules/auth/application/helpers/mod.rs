pub mod bearer_token_resolver;

pub use bearer_token_resolver::{BearerAuthenticator, BearerTokenResolver, ResolveBearerError};
