pub mod profile;
pub mod seed;
