pub mod db;
pub mod error;
#[cfg(test)]
pub mod test_utils;
pub mod utils;
pub mod validation;
