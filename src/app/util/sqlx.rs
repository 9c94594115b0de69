use std::borrow::Cow;

use sqlx::error::DatabaseError;

/// SQLite extended result codes.
#[non_exhaustive]
pub struct SqliteCodes;

impl SqliteCodes {
    pub const FOREIGN_KEY_VIOLATION: &str = "787";
}

pub fn get_code_from_db_err(db_err: &dyn DatabaseError) -> Option<String> {
    match db_err.code() {
        Some(code) => match code {
            Cow::Borrowed(val) => Some(val.to_owned()),
            Cow::Owned(val) => Some(val),
        },
        None => None,
    }
}

pub fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error()
    else {
        return false;
    };

    match get_code_from_db_err(db_err) {
        Some(code) if code == SqliteCodes::FOREIGN_KEY_VIOLATION => true,
        _ => db_err.message().contains("FOREIGN KEY constraint failed"),
    }
}
