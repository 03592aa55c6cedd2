pub mod app_state_builder;
pub mod auth_helper;
pub mod fakes;
pub mod flow;
pub mod stubs;
pub mod test_db;
