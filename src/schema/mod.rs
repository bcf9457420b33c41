pub mod common;
pub mod health;
pub mod profile;
