pub mod check;
pub mod config;
pub mod scope;
pub mod types;
