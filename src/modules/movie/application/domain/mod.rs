pub mod entities;
pub mod filters;
pub mod runtime;
pub mod validation;
