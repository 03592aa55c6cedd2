pub mod activate_user;
pub mod authenticate_user;
pub mod create_user;
