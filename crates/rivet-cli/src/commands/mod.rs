pub mod append;
pub mod validate;
