pub mod json;
pub mod sqlx;
pub mod time;
