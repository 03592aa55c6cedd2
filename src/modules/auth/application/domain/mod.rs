pub mod entities;
pub mod token;
pub mod validation;
