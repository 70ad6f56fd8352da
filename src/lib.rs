pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod patch;
pub mod report;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

#[cfg(test)]
mod tests;
