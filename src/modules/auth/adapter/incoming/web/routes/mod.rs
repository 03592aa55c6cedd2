pub mod activate_user;
pub mod authenticate_user;
pub mod register_user;
pub mod user_view;

pub use activate_user::{activate_user_handler, ActivateUserRequest, ActivateUserResponse};
pub use authenticate_user::{
    authenticate_user_handler, AuthenticateUserRequest, AuthenticationToken,
    AuthenticationTokenResponse,
};
pub use register_user::{register_user_handler, RegisterUserRequest, RegisterUserResponse};
pub use user_view::UserView;
