pub mod controller;
pub mod db;
pub mod env;
pub mod errors;
pub mod models;
pub mod router;
pub mod util;

#[cfg(test)]
pub mod test_utils;
